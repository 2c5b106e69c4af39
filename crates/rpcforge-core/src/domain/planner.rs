//! Name, namespace and path derivation for one run.
//!
//! The planner is a pure function of its inputs: the same project, route,
//! method and facade resolution always give the same plan.

use super::entities::{
    ArtifactPlan, ArtifactTarget, DerivedNames, MethodSpecification, ProjectDescriptor,
    TemplateContext,
};
use super::facade::{FacadeResolution, interface_name_for, synthesized_base_name};
use super::layout::{ModuleRoot, SourceLayout};
use super::naming::{lower_first, to_pascal_case, to_upper_snake};
use super::value_objects::ArtifactKind;

/// Namespace suffix (appended to `{prefix}.{project}`) and module root for
/// each always-new artifact kind. The route path is appended to the suffix.
const NEW_ARTIFACT_LAYOUT: [(ArtifactKind, &str, ModuleRoot); 8] = [
    (ArtifactKind::RequestDto, ".facade.request.", ModuleRoot::Facade),
    (ArtifactKind::ResponseDto, ".facade.response.", ModuleRoot::Facade),
    (ArtifactKind::RequestVo, ".biz.model.vo.request.", ModuleRoot::Biz),
    (ArtifactKind::ResponseVo, ".biz.model.vo.response.", ModuleRoot::Biz),
    (ArtifactKind::Validator, ".facade.validator.", ModuleRoot::FacadeImpl),
    (ArtifactKind::Mapper, ".facade.mapper.", ModuleRoot::FacadeImpl),
    (ArtifactKind::Converter, ".facade.converter.", ModuleRoot::FacadeImpl),
    (ArtifactKind::Manager, ".biz.manager.", ModuleRoot::Biz),
];

const FACADE_SUFFIX: &str = ".facade";
const FACADE_IMPL_SUFFIX: &str = ".facade.impl";

pub struct ArtifactPlanner;

impl ArtifactPlanner {
    /// Derive every name and target for `spec`.
    ///
    /// `date` is inserted verbatim as the `date` template variable so the
    /// planner stays clock-free.
    pub fn plan(
        project: &ProjectDescriptor,
        spec: &MethodSpecification,
        resolution: &FacadeResolution,
        layout: &SourceLayout,
        date: &str,
    ) -> ArtifactPlan {
        let names = Self::derive_names(spec, resolution);
        let project_id = spec.project_id();
        let route = spec.route_path();

        let new_artifacts: Vec<ArtifactTarget> = NEW_ARTIFACT_LAYOUT
            .iter()
            .map(|&(kind, suffix, module)| {
                let namespace = layout.namespace(project_id, &format!("{suffix}{route}"));
                let type_name = names_for(&names, kind).to_string();
                ArtifactTarget {
                    kind,
                    file_path: layout.source_file(module, &namespace, &type_name),
                    namespace,
                    type_name,
                }
            })
            .collect();

        let interface = match resolution {
            FacadeResolution::Matched(m) => ArtifactTarget {
                kind: ArtifactKind::Interface,
                namespace: m
                    .namespace
                    .clone()
                    .unwrap_or_else(|| layout.namespace(project_id, FACADE_SUFFIX)),
                type_name: m.type_name.clone(),
                file_path: m.file_path.clone(),
            },
            FacadeResolution::NotFound => {
                let namespace = layout.namespace(project_id, FACADE_SUFFIX);
                ArtifactTarget {
                    kind: ArtifactKind::Interface,
                    file_path: layout.source_file(ModuleRoot::Facade, &namespace, &names.interface),
                    namespace,
                    type_name: names.interface.clone(),
                }
            }
        };

        let impl_namespace = layout.namespace(project_id, FACADE_IMPL_SUFFIX);
        let implementation = ArtifactTarget {
            kind: ArtifactKind::Implementation,
            file_path: layout.source_file(
                ModuleRoot::FacadeImpl,
                &impl_namespace,
                &names.implementation,
            ),
            namespace: impl_namespace,
            type_name: names.implementation.clone(),
        };

        let mut plan = ArtifactPlan {
            method_name: spec.method_name().to_string(),
            names,
            new_artifacts,
            interface,
            interface_matched: resolution.is_matched(),
            implementation,
            context: TemplateContext::new(),
        };
        plan.context = Self::build_context(&plan, project, spec, date);
        plan
    }

    pub fn derive_names(spec: &MethodSpecification, resolution: &FacadeResolution) -> DerivedNames {
        let method = spec.method_name();
        let route = spec.route_path();

        let (base_name, interface) = match resolution.matched() {
            Some(m) => (m.base_name().to_string(), m.type_name.clone()),
            None => {
                let base = synthesized_base_name(route);
                let interface = interface_name_for(&base);
                (base, interface)
            }
        };

        let method_pascal = to_pascal_case(method);
        let route_stem = format!("{}{method}", to_pascal_case(route));

        DerivedNames {
            request_dto: format!("{method_pascal}RequestDTO"),
            response_dto: format!("{method_pascal}ResponseDTO"),
            request_vo: format!("{method_pascal}RequestVO"),
            response_vo: format!("{method_pascal}ResponseVO"),
            implementation: format!("{interface}Impl"),
            validator: format!("{route_stem}Validator"),
            mapper: format!("{route_stem}Mapper"),
            converter: format!("{route_stem}Converter"),
            manager: format!("{route_stem}Manager"),
            constant: to_upper_snake(&format!("{base_name}_{method}")),
            base_name,
            method_pascal,
            interface,
        }
    }

    fn build_context(
        plan: &ArtifactPlan,
        project: &ProjectDescriptor,
        spec: &MethodSpecification,
        date: &str,
    ) -> TemplateContext {
        let names = &plan.names;
        let namespace_of = |kind| {
            plan.target(kind)
                .map(|t| t.namespace.clone())
                .unwrap_or_default()
        };
        let fq = |kind| plan.target(kind).map(ArtifactTarget::fq_name).unwrap_or_default();

        let dto_imports = import_block(&[fq(ArtifactKind::RequestDto), fq(ArtifactKind::ResponseDto)]);
        let vo_imports = import_block(&[fq(ArtifactKind::RequestVo), fq(ArtifactKind::ResponseVo)]);
        let request_import = import_block(&[fq(ArtifactKind::RequestDto)]);

        TemplateContext::new()
            .with_variable("path", spec.route_path())
            .with_variable("methodName", spec.method_name())
            .with_variable("projectName", spec.project_id())
            .with_variable("date", date)
            .with_variable("author", spec.author())
            .with_variable("constantClassName", project.constants_type_name())
            .with_variable("constantPath", project.constants_type.trim())
            .with_variable("constantName", names.constant.as_str())
            .with_variable("requestDtoClassName", names.request_dto.as_str())
            .with_variable("responseDtoClassName", names.response_dto.as_str())
            .with_variable("requestVoClassName", names.request_vo.as_str())
            .with_variable("responseVoClassName", names.response_vo.as_str())
            .with_variable("facadeInterfaceClassName", names.interface.as_str())
            .with_variable("facadeImplClassName", names.implementation.as_str())
            .with_variable("validatorClassName", names.validator.as_str())
            .with_variable("facadeMapperClassName", names.mapper.as_str())
            .with_variable("converterClassName", names.converter.as_str())
            .with_variable("managerClassName", names.manager.as_str())
            .with_variable("facadePackageName", plan.interface.namespace.as_str())
            .with_variable("facadeImplPackageName", plan.implementation.namespace.as_str())
            .with_variable("validatorPackageName", namespace_of(ArtifactKind::Validator))
            .with_variable("facadeMapperPackageName", namespace_of(ArtifactKind::Mapper))
            .with_variable("converterPackageName", namespace_of(ArtifactKind::Converter))
            .with_variable("managerPackageName", namespace_of(ArtifactKind::Manager))
            .with_variable("requestDtoPackageName", namespace_of(ArtifactKind::RequestDto))
            .with_variable("responseDtoPackageName", namespace_of(ArtifactKind::ResponseDto))
            .with_variable("requestVoPackageName", namespace_of(ArtifactKind::RequestVo))
            .with_variable("responseVoPackageName", namespace_of(ArtifactKind::ResponseVo))
            .with_variable("facadeServiceName", lower_first(&names.interface))
            .with_variable("serviceProxyPath", project.service_proxy.trim())
            .with_variable("serviceProxyName", project.proxy_type_name())
            .with_variable("serviceProxy", lower_first(project.proxy_type_name()))
            .with_variable("serviceCoreProxyPath", project.core_proxy.trim())
            .with_variable("serviceCoreProxyName", project.core_proxy_type_name())
            .with_variable("customAllDtoImport", dto_imports)
            .with_variable("customAllVoImport", vo_imports)
            .with_variable("customRequestDtoImport", request_import)
    }
}

fn names_for(names: &DerivedNames, kind: ArtifactKind) -> &str {
    match kind {
        ArtifactKind::RequestDto => &names.request_dto,
        ArtifactKind::ResponseDto => &names.response_dto,
        ArtifactKind::RequestVo => &names.request_vo,
        ArtifactKind::ResponseVo => &names.response_vo,
        ArtifactKind::Validator => &names.validator,
        ArtifactKind::Mapper => &names.mapper,
        ArtifactKind::Converter => &names.converter,
        ArtifactKind::Manager => &names.manager,
        ArtifactKind::Interface => &names.interface,
        ArtifactKind::Implementation => &names.implementation,
        ArtifactKind::Constants | ArtifactKind::ServiceRegistration => &names.constant,
    }
}

/// One `import X;\n` line per name.
fn import_block(fq_names: &[String]) -> String {
    fq_names
        .iter()
        .map(|name| format!("import {name};\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::facade::FacadeMatch;
    use std::path::PathBuf;

    fn spec(route: &str, method: &str) -> MethodSpecification {
        MethodSpecification::new("treasurecore", route, method, "dev").unwrap()
    }

    fn project() -> ProjectDescriptor {
        ProjectDescriptor::new(
            "treasurecore",
            "com.ly.flight.intl.treasurecore.biz.constants.TreasureServiceConstants",
            "app/biz/src/main/java/com/ly/flight/intl/treasurecore/biz/constants/TreasureServiceConstants.java",
            "com.ly.flight.intl.treasurecore.facade.TreasureServiceProxy",
            "com.ly.flight.intl.treasurecore.biz.gateway.TreasureCoreProxyService",
        )
    }

    fn plan_for(route: &str, method: &str, resolution: &FacadeResolution) -> ArtifactPlan {
        ArtifactPlanner::plan(
            &project(),
            &spec(route, method),
            resolution,
            &SourceLayout::default(),
            "2026-01-02",
        )
    }

    #[test]
    fn fresh_route_names() {
        let names = ArtifactPlanner::derive_names(&spec("order", "query"), &FacadeResolution::NotFound);

        assert_eq!(names.base_name, "Order");
        assert_eq!(names.interface, "OrderFacade");
        assert_eq!(names.implementation, "OrderFacadeImpl");
        assert_eq!(names.request_dto, "QueryRequestDTO");
        assert_eq!(names.response_vo, "QueryResponseVO");
        assert_eq!(names.validator, "OrderqueryValidator");
        assert_eq!(names.manager, "OrderqueryManager");
        assert_eq!(names.constant, "ORDER_QUERY");
    }

    #[test]
    fn matched_interface_drives_base_name() {
        let resolution = FacadeResolution::Matched(FacadeMatch {
            file_path: PathBuf::from("x/RefundOrderFacade.java"),
            namespace: Some("a.b.facade".into()),
            type_name: "RefundOrderFacade".into(),
        });
        let names = ArtifactPlanner::derive_names(&spec("order", "getOrderInfo"), &resolution);

        assert_eq!(names.base_name, "RefundOrder");
        assert_eq!(names.interface, "RefundOrderFacade");
        assert_eq!(names.constant, "REFUND_ORDER_GET_ORDER_INFO");
        assert_eq!(names.request_dto, "GetOrderInfoRequestDTO");
    }

    #[test]
    fn interface_name_is_consistent_across_resolution() {
        let fresh = ArtifactPlanner::derive_names(&spec("order", "query"), &FacadeResolution::NotFound);
        let matched = FacadeResolution::Matched(FacadeMatch {
            file_path: PathBuf::from("OrderFacade.java"),
            namespace: None,
            type_name: format!("{}Facade", fresh.base_name),
        });
        let again = ArtifactPlanner::derive_names(&spec("order", "query"), &matched);
        assert_eq!(fresh.interface, again.interface);
        assert_eq!(fresh.constant, again.constant);
    }

    #[test]
    fn plan_has_eight_new_artifacts_in_expected_places() {
        let plan = plan_for("order", "query", &FacadeResolution::NotFound);
        assert_eq!(plan.new_artifacts.len(), 8);

        let dto = plan.target(ArtifactKind::RequestDto).unwrap();
        assert_eq!(dto.namespace, "com.ly.flight.intl.treasurecore.facade.request.order");
        assert_eq!(
            dto.file_path,
            PathBuf::from(
                "app/facade/src/main/java/com/ly/flight/intl/treasurecore/facade/request/order/QueryRequestDTO.java"
            )
        );

        let manager = plan.target(ArtifactKind::Manager).unwrap();
        assert_eq!(manager.namespace, "com.ly.flight.intl.treasurecore.biz.manager.order");
        assert!(manager.file_path.starts_with("app/biz/src/main/java"));

        let mapper = plan.target(ArtifactKind::Mapper).unwrap();
        assert_eq!(mapper.namespace, "com.ly.flight.intl.treasurecore.facade.mapper.order");
        assert!(mapper.file_path.starts_with("app/facade-impl/src/main/java"));
    }

    #[test]
    fn fresh_interface_and_implementation_paths() {
        let plan = plan_for("order", "query", &FacadeResolution::NotFound);
        assert!(!plan.interface_matched);
        assert_eq!(plan.interface.namespace, "com.ly.flight.intl.treasurecore.facade");
        assert_eq!(
            plan.interface.file_path,
            PathBuf::from("app/facade/src/main/java/com/ly/flight/intl/treasurecore/facade/OrderFacade.java")
        );
        assert_eq!(plan.implementation.namespace, "com.ly.flight.intl.treasurecore.facade.impl");
        assert_eq!(
            plan.implementation.file_path,
            PathBuf::from(
                "app/facade-impl/src/main/java/com/ly/flight/intl/treasurecore/facade/impl/OrderFacadeImpl.java"
            )
        );
    }

    #[test]
    fn context_carries_guaranteed_keys() {
        let plan = plan_for("order", "query", &FacadeResolution::NotFound);
        let ctx = &plan.context;

        assert_eq!(ctx.get("date"), Some("2026-01-02"));
        assert_eq!(ctx.get("constantClassName"), Some("TreasureServiceConstants"));
        assert_eq!(ctx.get("serviceProxy"), Some("treasureServiceProxy"));
        assert_eq!(ctx.get("facadeServiceName"), Some("orderFacade"));
        assert_eq!(
            ctx.get("customRequestDtoImport"),
            Some("import com.ly.flight.intl.treasurecore.facade.request.order.QueryRequestDTO;\n")
        );
        assert_eq!(ctx.get("customAllVoImport").map(|s| s.lines().count()), Some(2));
        assert_eq!(ctx.len(), 37);
    }

    #[test]
    fn blank_project_renders_blank_values() {
        let plan = ArtifactPlanner::plan(
            &ProjectDescriptor::blank("ghost"),
            &MethodSpecification::new("ghost", "order", "query", "dev").unwrap(),
            &FacadeResolution::NotFound,
            &SourceLayout::default(),
            "2026-01-02",
        );
        assert_eq!(plan.context.get("constantClassName"), Some(""));
        assert_eq!(plan.context.get("serviceProxy"), Some(""));
        assert_eq!(plan.context.get("serviceCoreProxyPath"), Some(""));
    }

    #[test]
    fn planning_is_deterministic() {
        let a = plan_for("order.item", "query", &FacadeResolution::NotFound);
        let b = plan_for("order.item", "query", &FacadeResolution::NotFound);
        assert_eq!(a, b);
    }
}
