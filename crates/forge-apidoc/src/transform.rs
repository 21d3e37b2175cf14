//! Internal class conversion
//!
//! Classes whose constructor is marked `@internal` cannot be constructed by
//! users, so they are documented as interfaces. A class implementing
//! interfaces becomes an interface extending them.

use crate::node::{ApiDoc, ApiDocDef, DocIdentity};
use crate::variable::VariableDef;
use tracing::debug;

/// Pending rewrite of one document
struct Conversion {
    index: usize,
    marker: Option<ApiDoc>,
}

/// Rewrite class documents with an internal constructor into interfaces
///
/// When `add_injectable_references` is set, a `const` document typed
/// `InjectableReference` is appended for every converted class, under the
/// class's own id and name. Documents are rewritten in place or appended;
/// none are removed. Already converted documents are interfaces and are left
/// alone.
pub fn convert_private_classes_to_interfaces(docs: &mut Vec<ApiDoc>, add_injectable_references: bool) {
    let conversions: Vec<Conversion> = docs
        .iter()
        .enumerate()
        .filter(|(_, doc)| match &doc.def {
            ApiDocDef::Class { class_def } => class_def.has_internal_constructor(),
            _ => false,
        })
        .map(|(index, doc)| Conversion {
            index,
            marker: add_injectable_references.then(|| injectable_reference(doc)),
        })
        .collect();

    let mut markers = Vec::new();
    for conversion in conversions {
        let doc = &mut docs[conversion.index];
        if let ApiDocDef::Class { class_def } = &mut doc.def {
            let mut interface_def = std::mem::take(class_def);
            interface_def.extends_clauses = std::mem::take(&mut interface_def.implements_clauses);
            doc.def = ApiDocDef::Interface { interface_def };
        }
        debug!(id = doc.id(), "converted internal class to interface");
        markers.extend(conversion.marker);
    }
    docs.extend(markers);
}

/// The `const` marker standing in for a converted class
fn injectable_reference(class_doc: &ApiDoc) -> ApiDoc {
    let identity = DocIdentity::new(class_doc.module_id(), class_doc.name());
    let mut marker = ApiDoc::new(
        identity,
        ApiDocDef::Const {
            variable_def: VariableDef::injectable_reference(),
        },
    );
    marker.symbol_name = class_doc.symbol_name.clone();
    marker.content = class_doc.content.clone();
    marker.file_info = class_doc.file_info.clone();
    marker.starting_line = class_doc.starting_line;
    marker.ending_line = class_doc.ending_line;
    marker.original_module = class_doc.original_module.clone();
    marker
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::HeritageInfo;
    use crate::node::DocKind;
    use crate::test::mock_class_doc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_internal_class_becomes_interface() {
        let mut docs = vec![mock_class_doc("index", "SomeClass", true, &["Base"], &["A", "B"])];
        convert_private_classes_to_interfaces(&mut docs, false);

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].kind(), DocKind::Interface);
        let def = docs[0].def.class_like().unwrap();
        assert_eq!(
            def.extends_clauses,
            vec![HeritageInfo::new("A", "A"), HeritageInfo::new("B", "B")]
        );
        assert!(def.implements_clauses.is_empty());
    }

    #[test]
    fn test_public_class_is_untouched() {
        let original = vec![mock_class_doc("index", "Public", false, &["Base"], &["A"])];
        let mut docs = original.clone();
        convert_private_classes_to_interfaces(&mut docs, true);
        assert_eq!(docs, original);
    }

    #[test]
    fn test_injectable_reference_marker() {
        let mut docs = vec![
            mock_class_doc("index", "SomeClass", true, &[], &[]),
            mock_class_doc("index", "Other", false, &[], &[]),
        ];
        convert_private_classes_to_interfaces(&mut docs, true);

        assert_eq!(docs.len(), 3);
        let marker = &docs[2];
        assert_eq!(marker.kind(), DocKind::Const);
        assert_eq!(marker.id(), "index/SomeClass");
        assert_eq!(marker.name(), "SomeClass");
        assert_eq!(
            marker.def.variable_def().unwrap().type_text,
            "InjectableReference"
        );
        assert!(marker.def.is_injectable_reference());
        // the class itself converted cleanly with no heritage clauses
        assert!(docs[0].def.class_like().unwrap().extends_clauses.is_empty());
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let mut docs = vec![mock_class_doc("a", "Internal", true, &[], &["X"])];
        convert_private_classes_to_interfaces(&mut docs, true);
        let once = docs.clone();
        convert_private_classes_to_interfaces(&mut docs, true);
        assert_eq!(docs, once);
    }

    #[test]
    fn test_documents_from_several_modules() {
        let mut docs = vec![
            mock_class_doc("a", "Shared", true, &[], &[]),
            mock_class_doc("b", "Shared", false, &[], &[]),
            mock_class_doc("c", "Shared", true, &[], &["I"]),
        ];
        convert_private_classes_to_interfaces(&mut docs, true);

        let summary: Vec<(&str, DocKind)> = docs.iter().map(|d| (d.id(), d.kind())).collect();
        assert_eq!(
            summary,
            vec![
                ("a/Shared", DocKind::Interface),
                ("b/Shared", DocKind::Class),
                ("c/Shared", DocKind::Interface),
                ("a/Shared", DocKind::Const),
                ("c/Shared", DocKind::Const),
            ]
        );
    }
}
