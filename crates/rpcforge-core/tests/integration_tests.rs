//! Integration tests for rpcforge-core public API (no filesystem).

use rpcforge_core::domain::{
    ArtifactKind, ArtifactPlanner, DuplicatePolicy, FacadeResolution, MethodSpecification,
    PatchOutcome, ProjectDescriptor, ProjectRegistry, SourceLayout, SourcePatcher,
    naming::{to_pascal_case, to_upper_snake},
};

fn spec(project: &str, route: &str, method: &str) -> MethodSpecification {
    MethodSpecification::new(project, route, method, "integration").unwrap()
}

#[test]
fn naming_properties() {
    assert_eq!(to_upper_snake("refundCore"), "REFUND_CORE");
    assert_eq!(to_upper_snake("refund.core"), "REFUND_CORE");
    assert_eq!(to_upper_snake("getOrderInfo"), "GET_ORDER_INFO");
    assert_eq!(to_upper_snake("a..b"), "A_B");
    assert_eq!(to_upper_snake(""), "");
}

#[test]
fn interface_name_is_pascal_route_plus_suffix() {
    for route in ["order", "order_item", "refund-detail", "a.b.c"] {
        let plan = ArtifactPlanner::plan(
            &ProjectDescriptor::blank("p"),
            &spec("p", route, "query"),
            &FacadeResolution::NotFound,
            &SourceLayout::default(),
            "2026-01-01",
        );
        assert_eq!(plan.names.interface, format!("{}Facade", to_pascal_case(route)));
    }
}

#[test]
fn unknown_project_lookup_is_blank() {
    let registry = ProjectRegistry::new();
    let d = registry.lookup("missing");
    assert!(d.is_blank());
    assert_eq!(d.constants_file_path(), None);
}

#[test]
fn planned_declaration_patches_minimal_interface_exactly() {
    let plan = ArtifactPlanner::plan(
        &ProjectDescriptor::blank("p"),
        &spec("p", "order", "query"),
        &FacadeResolution::NotFound,
        &SourceLayout::default(),
        "2026-01-01",
    );
    let decl = SourcePatcher::interface_method(&plan.names, &plan.method_name);

    let outcome = SourcePatcher::apply(
        "package p;\ninterface X {\n}\n",
        &["p.q.Dto"],
        &decl,
        DuplicatePolicy::Skip,
    )
    .unwrap();

    let PatchOutcome::Patched(text) = outcome else {
        panic!("expected a patch");
    };
    assert_eq!(
        text,
        format!("package p;\n\nimport p.q.Dto;\ninterface X {{\n\n{}\n}}\n", decl.text)
    );

    // A second run with the same plan leaves the file alone.
    let again = SourcePatcher::apply(&text, &["p.q.Dto"], &decl, DuplicatePolicy::Skip).unwrap();
    assert_eq!(again, PatchOutcome::AlreadyPresent);
}

#[test]
fn every_new_artifact_has_a_template() {
    for kind in ArtifactKind::NEW_FILE_KINDS {
        assert!(kind.template_id().is_some(), "{kind} has no template");
    }
}
