//! Enum documentation
//!
//! Enums may be declared across several blocks. The first block is the
//! primary declaration; the others are kept for reference but contribute
//! only their members.

use crate::members::MemberDoc;
use crate::node::DeclarationRef;
use serde::{Deserialize, Serialize};

/// Payload of an `enum` document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    /// Members of every block in source order; `type` holds the
    /// initializer source text, or is empty
    #[serde(default)]
    pub members: Vec<MemberDoc>,

    /// Declarations beyond the primary one
    #[serde(default)]
    pub additional_declarations: Vec<DeclarationRef>,

    /// `const enum`
    #[serde(default)]
    pub is_const: bool,
}

impl EnumDef {
    /// Find a member by name
    pub fn member(&self, name: &str) -> Option<&MemberDoc> {
        self.members.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::members::MemberKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_lookup() {
        let mut red = MemberDoc::new("Color", "Red", MemberKind::EnumMember);
        red.type_text = "1".into();
        let green = MemberDoc::new("Color", "Green", MemberKind::EnumMember);
        let def = EnumDef {
            members: vec![red, green],
            ..Default::default()
        };
        assert_eq!(def.member("Red").map(|m| m.type_text.as_str()), Some("1"));
        assert_eq!(def.member("Green").map(|m| m.id.as_str()), Some("Color.Green"));
    }
}
