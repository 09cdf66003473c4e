use super::GeneratedFake;
use super::naming::{StemAllocator, argument_property, call_count_property, returns_property};
use super::type_class::{TypeClass, classify, declarator, property_type, zero_value};
use crate::config::FakeConfig;
use crate::types::{MethodKind, ObjcProtocol, ProtocolMethod};

/// Builds a recording test double for a protocol
#[derive(Debug, Clone, Default)]
pub struct FakeGenerator {
    config: FakeConfig,
}

/// One method of the fake, with the stem its recording properties share.
/// Class methods record nothing and have no stem.
struct MethodPlan<'a> {
    method: &'a ProtocolMethod,
    stem: Option<String>,
}

impl FakeGenerator {
    pub fn new(config: FakeConfig) -> Self {
        Self { config }
    }

    pub fn class_name(&self, protocol: &ObjcProtocol) -> String {
        format!("{}{}", self.config.class_prefix, protocol.name)
    }

    /// Generate the fake for `protocol`, whose declaration is imported from
    /// `protocol_header` (e.g. `Greeter.h`)
    pub fn generate(&self, protocol: &ObjcProtocol, protocol_header: &str) -> GeneratedFake {
        let class_name = self.class_name(protocol);

        let mut stems = StemAllocator::new();
        let plans: Vec<MethodPlan> = protocol
            .methods
            .iter()
            .map(|method| MethodPlan {
                method,
                stem: match method.kind {
                    MethodKind::Instance => Some(stems.allocate(&method.selector)),
                    MethodKind::Class => None,
                },
            })
            .collect();

        let header = self.render_header(&class_name, protocol, protocol_header, &plans);
        let implementation = self.render_implementation(&class_name, &plans);

        tracing::info!(
            "Generated {} for protocol {} ({} methods)",
            class_name,
            protocol.name,
            plans.len()
        );
        GeneratedFake {
            class_name,
            header,
            implementation,
        }
    }

    fn render_header(
        &self,
        class_name: &str,
        protocol: &ObjcProtocol,
        protocol_header: &str,
        plans: &[MethodPlan],
    ) -> String {
        let mut lines = vec![
            "#import <Foundation/Foundation.h>".to_string(),
            format!("#import \"{protocol_header}\""),
        ];
        lines.extend(
            self.config
                .extra_imports
                .iter()
                .map(|import| format!("#import {import}")),
        );
        lines.push(String::new());

        if self.config.assume_nonnull {
            lines.push("NS_ASSUME_NONNULL_BEGIN".to_string());
            lines.push(String::new());
        }

        lines.push(format!(
            "@interface {} : {} <{}>",
            class_name, self.config.superclass, protocol.name
        ));

        for plan in plans {
            let Some(stem) = &plan.stem else { continue };
            let selector = &plan.method.selector;

            lines.push(String::new());
            lines.push(self.property("NSUInteger", &call_count_property(stem), true));
            for parameter in selector.parameters() {
                lines.push(self.property(
                    &parameter.type_name,
                    &argument_property(stem, &parameter.name),
                    true,
                ));
            }
            if classify(selector.return_type()) != TypeClass::Void {
                lines.push(self.property(selector.return_type(), &returns_property(stem), false));
            }
        }

        lines.push(String::new());
        lines.push("@end".to_string());

        if self.config.assume_nonnull {
            lines.push(String::new());
            lines.push("NS_ASSUME_NONNULL_END".to_string());
        }

        finish(lines)
    }

    fn render_implementation(&self, class_name: &str, plans: &[MethodPlan]) -> String {
        let mut lines = vec![
            format!("#import \"{class_name}.h\""),
            String::new(),
            format!("@implementation {class_name}"),
        ];

        for plan in plans {
            let method = plan.method;
            let selector = &method.selector;

            lines.push(String::new());
            lines.push(format!("{} {{", selector.declaration(method.kind)));
            match &plan.stem {
                Some(stem) => {
                    lines.push(format!("    _{} += 1;", call_count_property(stem)));
                    for parameter in selector.parameters() {
                        let value = match classify(&parameter.type_name) {
                            TypeClass::Block => format!("[{} copy]", parameter.name),
                            _ => parameter.name.clone(),
                        };
                        lines.push(format!(
                            "    _{} = {};",
                            argument_property(stem, &parameter.name),
                            value
                        ));
                    }
                    if classify(selector.return_type()) != TypeClass::Void {
                        lines.push(format!("    return _{};", returns_property(stem)));
                    }
                }
                None => {
                    if let Some(zero) = zero_value(selector.return_type()) {
                        lines.push(format!("    return {zero};"));
                    }
                }
            }
            lines.push("}".to_string());
        }

        lines.push(String::new());
        lines.push("@end".to_string());
        finish(lines)
    }

    fn property(&self, type_name: &str, name: &str, readonly: bool) -> String {
        let class = classify(type_name);
        let mut attributes = vec![
            "nonatomic",
            match class {
                TypeClass::Object => "strong",
                TypeClass::Block => "copy",
                TypeClass::Void | TypeClass::Scalar => "assign",
            },
        ];
        if readonly {
            attributes.push("readonly");
        }
        if self.config.assume_nonnull && matches!(class, TypeClass::Object | TypeClass::Block) {
            attributes.push("nullable");
        }

        format!(
            "@property ({}) {};",
            attributes.join(", "),
            declarator(&property_type(type_name), name)
        )
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
