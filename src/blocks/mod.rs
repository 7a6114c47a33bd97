// Block catalog - centralized block schema definitions

pub mod about;
pub mod hero;
pub mod simple_blocks;

use crate::registry::VariantRegistry;

pub use about::AboutBlocks;
pub use hero::HeroBlocks;
pub use simple_blocks::{CtaBlocks, FeaturesBlocks, FormBlocks, MediaBlocks};

/// Build the registry with every block family registered
pub fn create_registry() -> VariantRegistry {
    let mut registry = VariantRegistry::new();

    registry.register::<HeroBlocks>();
    registry.register::<AboutBlocks>();
    registry.register::<FeaturesBlocks>();
    registry.register::<MediaBlocks>();
    registry.register::<FormBlocks>();
    registry.register::<CtaBlocks>();

    registry
}

/// Validate every registered block definition
pub fn validate_blocks() -> Result<(), Vec<String>> {
    let registry = create_registry();
    registry.validate()
}
