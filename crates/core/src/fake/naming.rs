//! Names of the recording properties of a fake

use std::collections::HashSet;

use crate::selector::ObjcSelector;

/// Uppercase the first character: `name` -> `Name`
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Camel-cased join of the selector keywords: `setName:age:` -> `setNameAge`
pub fn method_stem(selector: &ObjcSelector) -> String {
    let mut keywords = selector
        .components()
        .iter()
        .map(|c| c.keyword.as_str())
        .filter(|k| !k.is_empty());

    let mut stem = keywords.next().unwrap_or("method").to_string();
    for keyword in keywords {
        stem.push_str(&capitalize(keyword));
    }
    stem
}

/// Hands out stems, numbering repeats (`greet`, `greet:` -> `greet`, `greet2`)
#[derive(Debug, Default)]
pub struct StemAllocator {
    used: HashSet<String>,
}

impl StemAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, selector: &ObjcSelector) -> String {
        let base = method_stem(selector);
        let mut stem = base.clone();
        let mut n = 2;
        while !self.used.insert(stem.clone()) {
            stem = format!("{base}{n}");
            n += 1;
        }
        stem
    }
}

pub fn call_count_property(stem: &str) -> String {
    format!("{stem}CallCount")
}

pub fn argument_property(stem: &str, parameter_name: &str) -> String {
    format!("{stem}Arg{}", capitalize(parameter_name))
}

pub fn returns_property(stem: &str) -> String {
    format!("{stem}Returns")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::ObjcLexer;

    fn selector(source: &str) -> ObjcSelector {
        ObjcSelector::from_tokens(&ObjcLexer::new().tokenize(source, 0)).unwrap()
    }

    #[test]
    fn test_method_stem() {
        assert_eq!(
            method_stem(&selector("- (void)setName:(NSString *)name age:(NSInteger)age;")),
            "setNameAge"
        );
        assert_eq!(method_stem(&selector("- (void)reload;")), "reload");
        assert_eq!(method_stem(&selector("- (void)move:(int)x :(int)y;")), "move");
    }

    #[test]
    fn test_stem_allocator_numbers_repeats() {
        let mut stems = StemAllocator::new();
        assert_eq!(stems.allocate(&selector("- (void)greet;")), "greet");
        assert_eq!(stems.allocate(&selector("- (void)greet:(id)who;")), "greet2");
        assert_eq!(stems.allocate(&selector("- (void)greet:(id)a :(id)b;")), "greet3");
    }

    #[test]
    fn test_property_names() {
        assert_eq!(call_count_property("setNameAge"), "setNameAgeCallCount");
        assert_eq!(argument_property("setNameAge", "age"), "setNameAgeArgAge");
        assert_eq!(returns_property("farewell"), "farewellReturns");
    }
}
