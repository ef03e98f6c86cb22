use crate::bundle::{MappingRule, PolicyBundle};
use crate::error::PolicyError;
use glob::Pattern;

/// Compiled registry/repository/image wildcards of a single mapping.
pub struct ImageMatcher {
    registry: Pattern,
    repository: Pattern,
    image: Pattern,
}

impl ImageMatcher {
    pub fn new(registry: &str, repository: &str, image: &str) -> Result<Self, PolicyError> {
        Ok(Self {
            registry: compile(registry)?,
            repository: compile(repository)?,
            image: compile(image)?,
        })
    }

    pub fn for_mapping(mapping: &MappingRule) -> Result<Self, PolicyError> {
        Self::new(&mapping.registry, &mapping.repository, &mapping.image.value)
    }

    /// Match an image reference. `image` is the tag, digest or image id,
    /// depending on the mapping's match type.
    pub fn matches(&self, registry: &str, repository: &str, image: &str) -> bool {
        self.registry.matches(registry)
            && self.repository.matches(repository)
            && self.image.matches(image)
    }
}

fn compile(pattern: &str) -> Result<Pattern, PolicyError> {
    Pattern::new(pattern).map_err(|e| PolicyError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

impl PolicyBundle {
    /// First mapping, in bundle order, that matches the image.
    ///
    /// Mappings whose wildcards don't compile are skipped.
    pub fn mapping_for(
        &self,
        registry: &str,
        repository: &str,
        image: &str,
    ) -> Option<&MappingRule> {
        self.mappings
            .iter()
            .find(|mapping| match ImageMatcher::for_mapping(mapping) {
                Ok(matcher) => matcher.matches(registry, repository, image),
                Err(e) => {
                    tracing::warn!(mapping = %mapping.id, "Skipping mapping: {}", e);
                    false
                }
            })
    }
}
