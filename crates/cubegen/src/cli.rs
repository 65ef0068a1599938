use clap::Parser;
use cubegen_core::{Float3, GridConfig};

#[derive(Parser, Debug)]
#[command(name = "cubegen")]
#[command(author, version, about = "Print a cubic lattice of spheres as XMFLOAT3 initializer literals")]
pub struct Cli {
    /// Lattice origin as X,Y,Z
    #[arg(long, default_value = "0,0,0", value_parser = parse_center, allow_hyphen_values = true)]
    pub center: Float3,

    /// Spacing between adjacent spheres on each axis
    #[arg(long, default_value_t = 0.6, allow_negative_numbers = true)]
    pub stride: f64,

    /// Radius of every sphere
    #[arg(long, default_value_t = 0.45, allow_negative_numbers = true)]
    pub radius: f64,

    /// Lattice steps from the center to the boundary on each axis
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub half_extent: i32,
}

impl Cli {
    pub fn to_config(&self) -> GridConfig {
        GridConfig {
            center: self.center,
            stride: self.stride,
            radius: self.radius,
            half_extent: self.half_extent,
        }
    }
}

fn parse_center(s: &str) -> Result<Float3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z, got {} component(s)", parts.len()));
    };
    let parse = |v: &str| {
        v.parse::<f64>()
            .map_err(|e| format!("invalid component {v:?}: {e}"))
    };
    Ok(Float3::new(parse(*x)?, parse(*y)?, parse(*z)?))
}
