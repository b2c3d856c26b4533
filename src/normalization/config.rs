use serde::{Deserialize, Serialize};

fn default_fold_unicode() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NormalizationConfig {
    /// Cosmetic characters removed from the input (e.g. spaces and dashes)
    #[serde(default)]
    pub delete_chars: String,

    /// Map Unicode look-alike digits, dashes and spaces to their ASCII form
    /// before deleting cosmetic characters
    #[serde(default = "default_fold_unicode")]
    pub fold_unicode: bool,
}

impl NormalizationConfig {
    pub fn new(delete_chars: &str) -> Self {
        Self {
            delete_chars: delete_chars.to_owned(),
            fold_unicode: true,
        }
    }

    pub fn delete_chars(&self, delete_chars: String) -> Self {
        self.mutate_clone(|x| x.delete_chars = delete_chars)
    }

    pub fn fold_unicode(&self, fold_unicode: bool) -> Self {
        self.mutate_clone(|x| x.fold_unicode = fold_unicode)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self::new(" ")
    }
}
