//! How a parameter or return type is stored in a fake

/// Storage class of an Objective-C type spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Void,
    /// Object pointers, `id`, `instancetype` and `Class`: `strong`
    Object,
    /// Block types: `copy`
    Block,
    /// Everything else (numbers, structs, C pointers): `assign`
    Scalar,
}

const ANNOTATIONS: [&str; 9] = [
    "nullable",
    "nonnull",
    "null_unspecified",
    "_Nullable",
    "_Nonnull",
    "_Null_unspecified",
    "__nullable",
    "__nonnull",
    "__kindof",
];

const NUMERIC: [&str; 20] = [
    "NSInteger",
    "NSUInteger",
    "CGFloat",
    "NSTimeInterval",
    "double",
    "float",
    "int",
    "unsigned",
    "long",
    "short",
    "char",
    "size_t",
    "int8_t",
    "int16_t",
    "int32_t",
    "int64_t",
    "uint8_t",
    "uint16_t",
    "uint32_t",
    "uint64_t",
];

/// Spelling with nullability and `__kindof` annotations removed, e.g.
/// `nullable NSString *` becomes `NSString *`
pub fn strip_nullability(type_name: &str) -> String {
    type_name
        .split_whitespace()
        .filter_map(|word| match word.strip_prefix('*') {
            Some(rest) if ANNOTATIONS.contains(&rest) => Some("*"),
            _ if ANNOTATIONS.contains(&word) => None,
            _ => Some(word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spelling used when the type declares a property: `instancetype` is
/// only valid as a method return type
pub fn property_type(type_name: &str) -> String {
    let stripped = strip_nullability(type_name);
    if stripped == "instancetype" {
        "id".to_string()
    } else {
        stripped
    }
}

pub fn classify(type_name: &str) -> TypeClass {
    let stripped = strip_nullability(type_name);
    let base = stripped.trim_start_matches("const ").trim();

    if base == "void" {
        return TypeClass::Void;
    }
    if base.contains("(^") {
        return TypeClass::Block;
    }
    if matches!(base, "id" | "instancetype" | "Class")
        || base.starts_with("id<")
        || base.starts_with("id <")
    {
        return TypeClass::Object;
    }

    let pointer_depth = base
        .chars()
        .rev()
        .take_while(|c| *c == '*' || c.is_whitespace())
        .filter(|c| *c == '*')
        .count();
    let first_word = base
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .next()
        .unwrap_or_default();
    let object_like = first_word.starts_with(|c: char| c.is_ascii_uppercase())
        && !first_word.starts_with("CG")
        && !first_word.starts_with("CF")
        && !matches!(first_word, "BOOL" | "SEL" | "IMP");
    if pointer_depth == 1 && object_like {
        TypeClass::Object
    } else {
        TypeClass::Scalar
    }
}

/// Expression for "nothing" of the given type
pub fn zero_value(type_name: &str) -> Option<String> {
    let spelling = property_type(type_name);
    match classify(type_name) {
        TypeClass::Void => None,
        TypeClass::Object | TypeClass::Block => Some("nil".to_string()),
        TypeClass::Scalar if spelling == "BOOL" => Some("NO".to_string()),
        TypeClass::Scalar if NUMERIC.contains(&spelling.as_str()) || spelling.ends_with('*') => {
            Some("0".to_string())
        }
        TypeClass::Scalar => Some(format!("({spelling}){{0}}")),
    }
}

/// Join a type and a name into a declarator: `NSString *name`,
/// `NSInteger count`, `void (^handler)(BOOL)`
pub fn declarator(type_name: &str, name: &str) -> String {
    if let Some(caret) = type_name.find("(^") {
        let after = caret + 2;
        if let Some(close) = type_name[after..].find(')') {
            let close = after + close;
            let qualifiers = type_name[after..close].trim();
            let inner = if qualifiers.is_empty() {
                name.to_string()
            } else {
                format!("{qualifiers} {name}")
            };
            return format!("{}{}{}", &type_name[..after], inner, &type_name[close..]);
        }
    }
    if type_name.ends_with('*') {
        format!("{type_name}{name}")
    } else {
        format!("{type_name} {name}")
    }
}
