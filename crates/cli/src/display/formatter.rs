use fakesmith_core::{MethodKind, ObjcSelector, PersistedFake};
use serde::Serialize;

/// JSON view of a selector, as printed by `selector --json`
#[derive(Debug, Serialize)]
pub struct SelectorReport<'a> {
    pub kind: MethodKind,
    pub selector_string: String,
    pub declaration: String,
    pub selector: &'a ObjcSelector,
}

impl<'a> SelectorReport<'a> {
    pub fn new(kind: MethodKind, selector: &'a ObjcSelector) -> Self {
        Self {
            kind,
            selector_string: selector.selector_string(),
            declaration: selector.declaration(kind),
            selector,
        }
    }
}

/// One line per component: index, spelling and bound parameter
pub fn format_components(selector: &ObjcSelector) -> Vec<String> {
    selector
        .components()
        .iter()
        .enumerate()
        .map(|(index, component)| match selector.parameter_for_component(index) {
            Some(parameter) => format!(
                "{index}: {} ({}){}",
                component.spelling(),
                parameter.type_name,
                parameter.name
            ),
            None => format!("{index}: {}", component.spelling()),
        })
        .collect()
}

pub fn print_selector(kind: MethodKind, selector: &ObjcSelector) {
    println!("🔍 Selector: {}", selector.selector_string());
    println!("   ↩️  Returns: {}", selector.return_type());
    println!("   📍 Range: {}", selector.range());
    for line in format_components(selector) {
        println!("   {line}");
    }
    println!("   📝 {};", selector.declaration(kind));
}

pub fn print_persisted_fake(persisted: &PersistedFake) {
    println!(
        "✅ Generated {} for protocol {}",
        persisted.class_name, persisted.protocol
    );
    for path in &persisted.paths {
        println!("   📄 {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakesmith_core::ObjcLexer;

    #[test]
    fn test_format_components() {
        let tokens = ObjcLexer::new().tokenize("- (void)setName:(NSString *)name age:(NSInteger)age;", 0);
        let selector = ObjcSelector::from_tokens(&tokens).unwrap();
        assert_eq!(
            format_components(&selector),
            vec!["0: setName: (NSString *)name", "1: age: (NSInteger)age"]
        );
    }

    #[test]
    fn test_report_serializes_model() {
        let tokens = ObjcLexer::new().tokenize("+ (instancetype)shared;", 0);
        let selector = ObjcSelector::from_tokens(&tokens).unwrap();
        let report = SelectorReport::new(MethodKind::Class, &selector);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["selector_string"], "shared");
        assert_eq!(json["declaration"], "+ (instancetype)shared");
        assert_eq!(json["kind"], "Class");
        assert_eq!(json["selector"]["return_type"], "instancetype");
    }
}
