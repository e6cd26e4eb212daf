//! The primary-constructor pattern.

use recgen_core::parameter_name;
use recgen_ir::RecordDescription;

use crate::model::{AssignmentStatement, Constructor, Parameter, TypeDeclaration, Visibility};

/// `partial class T` holding `public T(..)` with `this.F = f;` per field.
///
/// The class carries no modifier so it merges with whatever the host
/// declaration says.
pub(super) fn constructor_type(record: &RecordDescription) -> TypeDeclaration {
    let (params, assignments): (Vec<_>, Vec<_>) = record
        .fields
        .iter()
        .map(|f| {
            let param = parameter_name(&f.name);
            (
                Parameter::new(&param, &f.ty),
                AssignmentStatement::new(format!("this.{}", f.name), param),
            )
        })
        .unzip();

    TypeDeclaration::new(&record.name)
        .visibility(Visibility::None)
        .partial()
        .constructor(
            Constructor::new(&record.name)
                .params(params)
                .assignments(assignments),
        )
}

#[cfg(test)]
mod tests {
    use recgen_ir::RecordField;

    use super::*;
    use crate::builder::Render;

    #[test]
    fn test_constructor_type() {
        let record = RecordDescription::new("Service")
            .field(RecordField::new("_data", "System.Guid"))
            .field(RecordField::new("Class", "string"));

        assert_eq!(
            constructor_type(&record).to_text(),
            "partial class Service\n{\n    public Service(System.Guid data, string @class)\n    {\n        this._data = data;\n        this.Class = @class;\n    }\n}\n"
        );
    }

    #[test]
    fn test_constructor_type_without_fields() {
        let text = constructor_type(&RecordDescription::new("Empty")).to_text();
        assert_eq!(text, "partial class Empty\n{\n    public Empty()\n    {\n    }\n}\n");
    }
}
