//! Case conversion for `#[redact(rename_all = "...")]`.

/// Naming convention applied to field names that have no explicit `rename`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    pub(crate) const ACCEPTED: &'static str = "`lowercase`, `UPPERCASE`, `PascalCase`, \
         `camelCase`, `snake_case`, `SCREAMING_SNAKE_CASE`, `kebab-case`, `SCREAMING-KEBAB-CASE`";

    pub(crate) fn parse(rule: &str) -> Option<Self> {
        Some(match rule {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebab,
            _ => return None,
        })
    }

    /// Converts a `snake_case` field name.
    pub(crate) fn apply(self, field: &str) -> String {
        match self {
            Self::Lower | Self::Snake => field.to_owned(),
            Self::Upper | Self::ScreamingSnake => field.to_ascii_uppercase(),
            Self::Pascal => pascal_case(field),
            Self::Camel => {
                let pascal = pascal_case(field);
                let mut chars = pascal.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_lowercase().chain(chars).collect()
                })
            }
            Self::Kebab => field.replace('_', "-"),
            Self::ScreamingKebab => field.replace('_', "-").to_ascii_uppercase(),
        }
    }
}

fn pascal_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut capitalize = true;
    for c in field.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            out.extend(c.to_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::RenameRule;

    #[test]
    fn converts_snake_case_fields() {
        let field = "api_key_id";
        assert_eq!(RenameRule::Lower.apply(field), "api_key_id");
        assert_eq!(RenameRule::Upper.apply(field), "API_KEY_ID");
        assert_eq!(RenameRule::Pascal.apply(field), "ApiKeyId");
        assert_eq!(RenameRule::Camel.apply(field), "apiKeyId");
        assert_eq!(RenameRule::ScreamingSnake.apply(field), "API_KEY_ID");
        assert_eq!(RenameRule::Kebab.apply(field), "api-key-id");
        assert_eq!(RenameRule::ScreamingKebab.apply(field), "API-KEY-ID");
    }

    #[test]
    fn single_word_fields() {
        assert_eq!(RenameRule::Pascal.apply("password"), "Password");
        assert_eq!(RenameRule::Camel.apply("password"), "password");
    }

    #[test]
    fn unknown_rule_is_rejected() {
        assert_eq!(RenameRule::parse("Title Case"), None);
        assert_eq!(RenameRule::parse("camelCase"), Some(RenameRule::Camel));
    }
}
