//! Built-in Java templates.
//!
//! One template per generated artifact, keyed by the ids returned from
//! `ArtifactKind::template_id`. Placeholders use `{{key}}` and draw on the
//! keys `ArtifactPlanner` puts in the run's `TemplateContext`. Every template
//! ends with the type's closing brace so a later run can patch the file.
//!
//! A templates directory can replace any of these; see
//! [`crate::template_loader`].

/// `(id, text)` for every built-in template, sorted by id.
pub fn all() -> [(&'static str, &'static str); 10] {
    [
        ("converter", CONVERTER),
        ("facade", FACADE),
        ("facadeImpl", FACADE_IMPL),
        ("facadeMapper", FACADE_MAPPER),
        ("manager", MANAGER),
        ("requestDTO", REQUEST_DTO),
        ("requestVO", REQUEST_VO),
        ("responseDTO", RESPONSE_DTO),
        ("responseVO", RESPONSE_VO),
        ("validator", VALIDATOR),
    ]
}

/// Built-in text for `id`.
pub fn get(id: &str) -> Option<&'static str> {
    all().into_iter().find(|(k, _)| *k == id).map(|(_, v)| v)
}

// ── Data carriers ─────────────────────────────────────────────────────────────

const REQUEST_DTO: &str = r#"package {{requestDtoPackageName}};

import java.io.Serializable;

import lombok.Data;

/**
 * {{methodName}} request
 *
 * @author {{author}}
 * @date {{date}}
 */
@Data
public class {{requestDtoClassName}} implements Serializable {

    private static final long serialVersionUID = 1L;
}
"#;

const RESPONSE_DTO: &str = r#"package {{responseDtoPackageName}};

import java.io.Serializable;

import lombok.Data;

/**
 * {{methodName}} response
 *
 * @author {{author}}
 * @date {{date}}
 */
@Data
public class {{responseDtoClassName}} implements Serializable {

    private static final long serialVersionUID = 1L;
}
"#;

const REQUEST_VO: &str = r#"package {{requestVoPackageName}};

import lombok.Data;

/**
 * {{methodName}} business request
 *
 * @author {{author}}
 * @date {{date}}
 */
@Data
public class {{requestVoClassName}} {
}
"#;

const RESPONSE_VO: &str = r#"package {{responseVoPackageName}};

import lombok.Data;

/**
 * {{methodName}} business response
 *
 * @author {{author}}
 * @date {{date}}
 */
@Data
public class {{responseVoClassName}} {
}
"#;

// ── Interface and implementation ──────────────────────────────────────────────

// The method blocks below match the declarations the patcher appends, so a
// re-run against a freshly generated file finds them already present.

const FACADE: &str = r#"package {{facadePackageName}};

{{customAllDtoImport}}
import javax.ws.rs.Consumes;
import javax.ws.rs.POST;
import javax.ws.rs.Path;
import javax.ws.rs.Produces;

import org.springframework.web.bind.annotation.RequestBody;

/**
 * {{path}} operations
 *
 * @author {{author}}
 * @date {{date}}
 */
@Path("{{path}}")
public interface {{facadeInterfaceClassName}} {

    @POST
    @Consumes({ "application/json; charset=UTF-8" })
    @Produces({ "application/json; charset=UTF-8" })
    @Path("{{methodName}}")
    {{responseDtoClassName}} {{methodName}}(@RequestBody {{requestDtoClassName}} requestDTO);
}
"#;

const FACADE_IMPL: &str = r#"package {{facadeImplPackageName}};

import {{facadePackageName}}.{{facadeInterfaceClassName}};
import {{serviceProxyPath}};
import {{constantPath}};
{{customAllDtoImport}}
import javax.annotation.Resource;

import org.springframework.stereotype.Service;

/**
 * {{facadeInterfaceClassName}} implementation
 *
 * @author {{author}}
 * @date {{date}}
 */
@Service("{{facadeServiceName}}")
public class {{facadeImplClassName}} implements {{facadeInterfaceClassName}} {

    @Resource
    private {{serviceProxyName}} {{serviceProxy}};

    /**
     * generated method
     * @param requestDTO
     * @return
     */
    @Override
    @GatewayLogCfg(logModule = {{constantClassName}}.{{constantName}})
    public {{responseDtoClassName}} {{methodName}}({{requestDtoClassName}} requestDTO) {
        {{responseDtoClassName}} responseDTO = new {{responseDtoClassName}}();
        responseDTO = ({{responseDtoClassName}}) {{serviceProxy}}.invoke({{constantClassName}}.{{constantName}},
            requestDTO, responseDTO);
        return responseDTO;
    }
}
"#;

// ── Pipeline stages ───────────────────────────────────────────────────────────

const VALIDATOR: &str = r#"package {{validatorPackageName}};

{{customRequestDtoImport}}
import org.springframework.stereotype.Component;

/**
 * Validates {{requestDtoClassName}}
 *
 * @author {{author}}
 * @date {{date}}
 */
@Component
public class {{validatorClassName}} {

    public void validate({{requestDtoClassName}} requestDTO) {
        if (requestDTO == null) {
            throw new IllegalArgumentException("{{methodName}} request must not be null");
        }
    }
}
"#;

const FACADE_MAPPER: &str = r#"package {{facadeMapperPackageName}};

{{customAllDtoImport}}{{customAllVoImport}}
import org.mapstruct.Mapper;
import org.mapstruct.factory.Mappers;

/**
 * Maps {{methodName}} carriers between the facade and business layers
 *
 * @author {{author}}
 * @date {{date}}
 */
@Mapper
public interface {{facadeMapperClassName}} {

    {{facadeMapperClassName}} INSTANCE = Mappers.getMapper({{facadeMapperClassName}}.class);

    {{requestVoClassName}} toRequestVO({{requestDtoClassName}} requestDTO);

    {{responseDtoClassName}} toResponseDTO({{responseVoClassName}} responseVO);
}
"#;

const CONVERTER: &str = r#"package {{converterPackageName}};

{{customAllDtoImport}}{{customAllVoImport}}import {{facadeMapperPackageName}}.{{facadeMapperClassName}};

import org.springframework.stereotype.Component;

/**
 * Converts {{methodName}} carriers
 *
 * @author {{author}}
 * @date {{date}}
 */
@Component
public class {{converterClassName}} {

    public {{requestVoClassName}} convertRequest({{requestDtoClassName}} requestDTO) {
        return {{facadeMapperClassName}}.INSTANCE.toRequestVO(requestDTO);
    }

    public {{responseDtoClassName}} convertResponse({{responseVoClassName}} responseVO) {
        return {{facadeMapperClassName}}.INSTANCE.toResponseDTO(responseVO);
    }
}
"#;

const MANAGER: &str = r#"package {{managerPackageName}};

{{customAllVoImport}}import {{serviceCoreProxyPath}};

import javax.annotation.Resource;

import org.springframework.stereotype.Component;

/**
 * {{methodName}} business logic
 *
 * @author {{author}}
 * @date {{date}}
 */
@Component
public class {{managerClassName}} {

    @Resource
    private {{serviceCoreProxyName}} coreProxyService;

    public {{responseVoClassName}} {{methodName}}({{requestVoClassName}} requestVO) {
        {{responseVoClassName}} responseVO = new {{responseVoClassName}}();
        return responseVO;
    }
}
"#;
