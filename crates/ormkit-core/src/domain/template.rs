//! The subscriber source skeleton.

/// Package the generated imports come from.
pub const ORM_PACKAGE: &str = "typeorm";

/// Extension of every generated file. Not configurable.
pub const SOURCE_EXTENSION: &str = "ts";

/// Fixed template for an empty entity subscriber class.
///
/// The only substitution is the class name, which is inserted verbatim: no
/// escaping, no identifier validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriberTemplate;

impl SubscriberTemplate {
    /// Render the source file for class `name`.
    pub fn render(name: &str) -> String {
        format!(
            "import {{EventSubscriber, EntitySubscriberInterface}} from \"{ORM_PACKAGE}\";\n\
             \n\
             @EventSubscriber()\n\
             export class {name} implements EntitySubscriberInterface<any> {{\n\
             \n\
             }}\n"
        )
    }

    /// File name the rendered class is written to: `<name>.ts`.
    pub fn file_name(name: &str) -> String {
        format!("{name}.{SOURCE_EXTENSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_exact_skeleton() {
        let expected = "import {EventSubscriber, EntitySubscriberInterface} from \"typeorm\";\n\
                        \n\
                        @EventSubscriber()\n\
                        export class UserSubscriber implements EntitySubscriberInterface<any> {\n\
                        \n\
                        }\n";
        assert_eq!(SubscriberTemplate::render("UserSubscriber"), expected);
    }

    #[test]
    fn exactly_one_class_declaration() {
        let out = SubscriberTemplate::render("UserSubscriber");
        assert_eq!(out.matches("export class ").count(), 1);
        assert!(out.contains("export class UserSubscriber implements"));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(
            SubscriberTemplate::render("PostSubscriber"),
            SubscriberTemplate::render("PostSubscriber")
        );
    }

    #[test]
    fn name_is_not_escaped() {
        let out = SubscriberTemplate::render("Weird<Name>");
        assert!(out.contains("export class Weird<Name> implements"));
    }

    #[test]
    fn file_name_uses_ts_extension() {
        assert_eq!(SubscriberTemplate::file_name("Foo"), "Foo.ts");
    }
}
