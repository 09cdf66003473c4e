use serde::{Deserialize, Serialize};

/// Shape of the generated fake class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FakeConfig {
    /// Prepended to the protocol name to form the class name
    pub class_prefix: String,
    pub superclass: String,
    /// Wrap the header in `NS_ASSUME_NONNULL_BEGIN/END`
    pub assume_nonnull: bool,
    /// Extra `#import` lines for the header, e.g. `<UIKit/UIKit.h>`
    pub extra_imports: Vec<String>,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            class_prefix: "Fake".to_string(),
            superclass: "NSObject".to_string(),
            assume_nonnull: true,
            extra_imports: Vec::new(),
        }
    }
}
