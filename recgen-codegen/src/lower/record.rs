//! Members declared directly on the record type.

use recgen_ir::RecordDescription;

use crate::model::{AssignmentStatement, Constructor, MethodDeclaration, Parameter, Statement};

/// `public T(f1, f2, ...)` assigning each parameter to its same-named member.
pub(super) fn primary_constructor(record: &RecordDescription) -> Constructor {
    Constructor::new(&record.name)
        .params(
            record
                .fields
                .iter()
                .map(|f| Parameter::new(&f.name, &f.ty)),
        )
        .assignments(
            record
                .fields
                .iter()
                .map(|f| AssignmentStatement::new(format!("this.{}", f.name), &f.name)),
        )
}

/// `T { a = .., b = .. }`.
pub(super) fn to_string_method(record: &RecordDescription) -> MethodDeclaration {
    let elements = record
        .fields
        .iter()
        .map(|f| format!("$\"{name} = {{this.{name}}}\"", name = f.name))
        .collect::<Vec<_>>()
        .join(", ");

    MethodDeclaration::new("ToString", "string")
        .override_()
        .statement(Statement::new(format!(
            "var elements = new string[] {{ {elements} }};"
        )))
        .statement(Statement::new(
            "var s = global::System.String.Join(\", \", elements);",
        ))
        .statement(Statement::new(format!(
            "return $\"{} {{{{ {{s}} }}}}\";",
            record.name
        )))
}

/// Value equality against another instance of the same type.
pub(super) fn equals_method(record: &RecordDescription) -> MethodDeclaration {
    let comparison = if record.fields.is_empty() {
        "return true;".to_string()
    } else {
        let terms = record
            .fields
            .iter()
            .map(|f| {
                format!(
                    "global::System.Collections.Generic.EqualityComparer<{ty}>.Default.Equals(this.{name}, other.{name})",
                    ty = f.ty,
                    name = f.name
                )
            })
            .collect::<Vec<_>>();
        format!("return {};", terms.join(" && "))
    };

    MethodDeclaration::new("Equals", "bool")
        .param(Parameter::new("other", &record.name))
        .statement(Statement::new("if (other is null) return false;"))
        .statement(Statement::new(comparison))
}

/// `Equals(object)`, delegating once the argument has the right type.
pub(super) fn object_equals_method(record: &RecordDescription) -> MethodDeclaration {
    MethodDeclaration::new("Equals", "bool")
        .override_()
        .param(Parameter::new("obj", "object"))
        .statement(Statement::new(format!(
            "return obj is {} other && Equals(other);",
            record.name
        )))
}
