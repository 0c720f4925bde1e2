use core::fmt;

use crate::params::RenderParams;

/// Texture mode names understood by the report, indexed by mode.
///
/// The packed field allows 0..=7 but only six modes are named here;
/// the remaining values are reported as invalid.
pub const TEXTURE_NAMES: [&str; 6] = [
    "Vertical stripes",
    "Horizontal stripes",
    "Vertical+Horizontal stripes",
    "Coordinate grid (RG = ST)",
    "Colored vertices",
    "Plain white",
];

/// Display name of a texture mode value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureName(pub u8);

impl fmt::Display for TextureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match TEXTURE_NAMES.get(self.0 as usize) {
            Some(name) => f.write_str(name),
            None => write!(f, "Invalid value: {}", self.0),
        }
    }
}

fn toggle(on: bool) -> &'static str {
    if on {
        "On"
    } else {
        "Off"
    }
}

fn shape(quad: bool) -> &'static str {
    if quad {
        "Quad"
    } else {
        "Triangle"
    }
}

/// Human-readable parameter listing, one field per line, each line
/// starting with `prefix`.
#[derive(Debug, Clone, Copy)]
pub struct ParamReport<'a> {
    pub params: &'a RenderParams,
    pub prefix: &'a str,
}

impl<'a> ParamReport<'a> {
    pub fn new(params: &'a RenderParams) -> Self {
        Self { params, prefix: "" }
    }

    pub fn with_prefix(params: &'a RenderParams, prefix: &'a str) -> Self {
        Self { params, prefix }
    }
}

impl fmt::Display for ParamReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, params) = (self.prefix, self.params);

        writeln!(f, "{p}Antialiasing: {}", toggle(params.anti_alias))?;
        writeln!(f, "{p}Edge marking: {}", toggle(params.edge_mark))?;
        writeln!(f, "{p}Wireframe   : {}", toggle(params.wireframe))?;
        writeln!(f, "{p}Alpha level : {}", params.alpha)?;
        writeln!(f, "{p}Shape       : {}", shape(params.quad))?;
        writeln!(f, "{p}Texture     : {}", TextureName(params.tex_mode))?;
        for (i, v) in params.vertices.iter().enumerate() {
            writeln!(f, "{p}Vertex {}    : {} x {} x {}", i + 1, v.x, v.y, v.z)?;
        }
        Ok(())
    }
}
