//! WGSL program compilation.
//!
//! Each stage is parsed and validated on the CPU with naga before anything is
//! handed to the device, so diagnostics come back as text instead of a device
//! error callback. "Linking" checks the interface the quad renderer relies on.

use std::borrow::Cow;
use std::fmt;

use naga::valid::{Capabilities, ValidationFlags, Validator};

/// Entry point the vertex source must define.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Entry point the fragment source must define.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Vertex attribute location of the 2D position.
pub const POSITION_LOCATION: u32 = 0;

/// Bind group / binding of the fill color uniform.
pub const FILL_GROUP: u32 = 0;
pub const FILL_BINDING: u32 = 0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader build failure. `log` carries the compiler or linker diagnostic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShaderError {
    #[error("an error occurred compiling the {stage} shader:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("unable to link the shader program: {log}")]
    Link { log: String },
}

impl ShaderError {
    /// Diagnostic text without the summary prefix.
    pub fn log(&self) -> &str {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => log,
        }
    }
}

/// A validated, linked vertex + fragment pair.
///
/// Holds the WGSL sources; device-side modules are created by
/// [`ShaderProgram::create_modules`] when a pipeline is built.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    vertex: Stage,
    fragment: Stage,
}

#[derive(Debug, Clone)]
struct Stage {
    source: String,
    module: naga::Module,
}

/// Device-side shader modules for a [`ShaderProgram`].
pub struct ShaderModules {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Creates one `wgpu::ShaderModule` per stage.
    pub fn create_modules(&self, device: &wgpu::Device) -> ShaderModules {
        let module = |label: &str, source: &str| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(Cow::Owned(source.to_owned())),
            })
        };

        ShaderModules {
            vertex: module("quadclick vertex shader", &self.vertex.source),
            fragment: module("quadclick fragment shader", &self.fragment.source),
        }
    }
}

/// Compiles both stages and links them into a program.
///
/// On error nothing is kept: the partially built stages are dropped with the
/// error returned.
pub fn compile_program(vertex_src: &str, fragment_src: &str) -> Result<ShaderProgram, ShaderError> {
    let vertex = compile_stage(ShaderStage::Vertex, vertex_src)?;
    let fragment = compile_stage(ShaderStage::Fragment, fragment_src)?;

    link(&vertex.module, &fragment.module)?;

    log::debug!("shader program linked ({VERTEX_ENTRY} -> {FRAGMENT_ENTRY})");
    Ok(ShaderProgram { vertex, fragment })
}

fn compile_stage(stage: ShaderStage, source: &str) -> Result<Stage, ShaderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Compile {
        stage,
        log: e.emit_to_string(source),
    })?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| ShaderError::Compile {
            stage,
            log: e.emit_to_string(source),
        })?;

    Ok(Stage {
        source: source.to_owned(),
        module,
    })
}

fn link(vertex: &naga::Module, fragment: &naga::Module) -> Result<(), ShaderError> {
    let vs = find_entry(vertex, naga::ShaderStage::Vertex, VERTEX_ENTRY)?;
    let fs = find_entry(fragment, naga::ShaderStage::Fragment, FRAGMENT_ENTRY)?;

    let vs_inputs: Vec<u32> = vs
        .function
        .arguments
        .iter()
        .flat_map(|arg| locations(vertex, arg.ty, arg.binding.as_ref()))
        .collect();
    if !vs_inputs.contains(&POSITION_LOCATION) {
        return Err(link_error(format!(
            "vertex entry point `{VERTEX_ENTRY}` does not read a position attribute at @location({POSITION_LOCATION})"
        )));
    }

    let vs_outputs: Vec<u32> = vs
        .function
        .result
        .as_ref()
        .map(|r| locations(vertex, r.ty, r.binding.as_ref()))
        .unwrap_or_default();

    for arg in &fs.function.arguments {
        for loc in locations(fragment, arg.ty, arg.binding.as_ref()) {
            if !vs_outputs.contains(&loc) {
                return Err(link_error(format!(
                    "fragment input @location({loc}) is not written by the vertex stage"
                )));
            }
        }
    }

    let has_fill_uniform = fragment.global_variables.iter().any(|(_, var)| {
        var.space == naga::AddressSpace::Uniform
            && var
                .binding
                .as_ref()
                .is_some_and(|b| b.group == FILL_GROUP && b.binding == FILL_BINDING)
    });
    if !has_fill_uniform {
        return Err(link_error(format!(
            "fragment stage does not declare the fill color uniform at @group({FILL_GROUP}) @binding({FILL_BINDING})"
        )));
    }

    Ok(())
}

fn find_entry<'m>(
    module: &'m naga::Module,
    stage: naga::ShaderStage,
    name: &str,
) -> Result<&'m naga::EntryPoint, ShaderError> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage && ep.name == name)
        .ok_or_else(|| link_error(format!("missing {stage:?} entry point `{name}`")))
}

/// User-defined `@location`s carried by a binding or by the members of a struct type.
fn locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
) -> Vec<u32> {
    match binding {
        Some(naga::Binding::Location { location, .. }) => vec![*location],
        Some(naga::Binding::BuiltIn(_)) => Vec::new(),
        None => match &module.types[ty].inner {
            naga::TypeInner::Struct { members, .. } => members
                .iter()
                .filter_map(|m| match &m.binding {
                    Some(naga::Binding::Location { location, .. }) => Some(*location),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        },
    }
}

fn link_error(log: String) -> ShaderError {
    log::debug!("shader link failed: {log}");
    ShaderError::Link { log }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = r#"
        @vertex
        fn vs_main(@location(0) a_position: vec2<f32>) -> @builtin(position) vec4<f32> {
            return vec4<f32>(a_position, 0.0, 1.0);
        }
    "#;

    const FS: &str = r#"
        struct Fill {
            color: vec4<f32>,
        };

        @group(0) @binding(0) var<uniform> u_fill: Fill;

        @fragment
        fn fs_main() -> @location(0) vec4<f32> {
            return u_fill.color;
        }
    "#;

    // ── compile ───────────────────────────────────────────────────────────

    #[test]
    fn valid_pair_links() {
        let program = compile_program(VS, FS).expect("program should link");
        assert_eq!(program.vertex.module.entry_points.len(), 1);
        assert_eq!(program.fragment.module.entry_points.len(), 1);
    }

    #[test]
    fn vertex_syntax_error_reports_diagnostic() {
        let broken = "@vertex fn vs_main( -> vec4<f32> { return; }";
        let err = compile_program(broken, FS).unwrap_err();
        match &err {
            ShaderError::Compile { stage, log } => {
                assert_eq!(*stage, ShaderStage::Vertex);
                assert!(!log.trim().is_empty());
            }
            other => panic!("expected compile error, got {other:?}"),
        }
        assert!(err.to_string().contains("vertex"));
    }

    #[test]
    fn fragment_syntax_error_reports_diagnostic() {
        let broken = "@fragment fn fs_main() -> @location(0) vec4<f32> { return vec4<f32>(1.0 }";
        let err = compile_program(VS, broken).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { stage: ShaderStage::Fragment, .. }));
        assert!(!err.log().is_empty());
    }

    #[test]
    fn type_error_fails_validation() {
        let broken = r#"
            @vertex
            fn vs_main(@location(0) a_position: vec2<f32>) -> @builtin(position) vec4<f32> {
                return a_position;
            }
        "#;
        let err = compile_program(broken, FS).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { stage: ShaderStage::Vertex, .. }));
        assert!(!err.log().is_empty());
    }

    // ── link ──────────────────────────────────────────────────────────────

    #[test]
    fn missing_vertex_entry_point_fails_link() {
        let renamed = VS.replace("vs_main", "main");
        let err = compile_program(&renamed, FS).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().contains(VERTEX_ENTRY));
    }

    #[test]
    fn vertex_without_position_attribute_fails_link() {
        let vs = r#"
            @vertex
            fn vs_main(@location(3) other: vec2<f32>) -> @builtin(position) vec4<f32> {
                return vec4<f32>(other, 0.0, 1.0);
            }
        "#;
        let err = compile_program(vs, FS).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
    }

    #[test]
    fn unmatched_fragment_input_fails_link() {
        let fs = r#"
            struct Fill {
                color: vec4<f32>,
            };

            @group(0) @binding(0) var<uniform> u_fill: Fill;

            @fragment
            fn fs_main(@location(1) tint: vec4<f32>) -> @location(0) vec4<f32> {
                return u_fill.color * tint;
            }
        "#;
        let err = compile_program(VS, fs).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().contains("@location(1)"));
    }

    #[test]
    fn matched_varying_links() {
        let vs = r#"
            struct VsOut {
                @builtin(position) clip: vec4<f32>,
                @location(1) tint: vec4<f32>,
            };

            @vertex
            fn vs_main(@location(0) a_position: vec2<f32>) -> VsOut {
                var out: VsOut;
                out.clip = vec4<f32>(a_position, 0.0, 1.0);
                out.tint = vec4<f32>(1.0, 1.0, 1.0, 1.0);
                return out;
            }
        "#;
        let fs = r#"
            struct Fill {
                color: vec4<f32>,
            };

            @group(0) @binding(0) var<uniform> u_fill: Fill;

            @fragment
            fn fs_main(@location(1) tint: vec4<f32>) -> @location(0) vec4<f32> {
                return u_fill.color * tint;
            }
        "#;
        assert!(compile_program(vs, fs).is_ok());
    }

    #[test]
    fn fragment_without_fill_uniform_fails_link() {
        let fs = r#"
            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec4<f32>(1.0, 0.0, 0.0, 1.0);
            }
        "#;
        let err = compile_program(VS, fs).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.log().contains("uniform"));
    }
}
