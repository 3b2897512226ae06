//! Console monitoring harness for the viewcull library.
//!
//! Orbits a camera around a ring of boxes and reports each box's
//! three-state frustum classification whenever it changes:
//! inside (blue), intersect (green), outside (red). The frustum is
//! re-extracted from the camera pose every tick; nothing is rendered.
//!
//! Usage: viewcull_demo [TICKS] [TARGETS]

use colored::{ColoredString, Colorize};
use viewcull::glam::{Mat4, Vec3};
use viewcull::{
    cull_debug, cull_info, Aabb, CameraPose, Containment, Error, Frustum, PerspectiveParams,
    Result,
};

const SOURCE: &str = "viewcull_demo";

const PLANE_NAMES: [&str; 6] = ["left", "right", "bottom", "top", "near", "far"];

/// Harness options parsed from the command line.
struct HarnessConfig {
    ticks: u32,
    targets: usize,
}

impl HarnessConfig {
    fn from_args(mut args: std::env::Args) -> Result<Self> {
        args.next(); // program name

        let ticks = match args.next() {
            Some(raw) => raw.parse().map_err(|_| {
                Error::InvalidConfig(format!(
                    "tick count must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => 96,
        };

        let targets = match args.next() {
            Some(raw) => raw.parse().map_err(|_| {
                Error::InvalidConfig(format!(
                    "target count must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => 12,
        };

        if ticks == 0 || targets == 0 {
            return Err(Error::InvalidConfig(
                "tick and target counts must be non-zero".to_string(),
            ));
        }

        Ok(Self { ticks, targets })
    }
}

/// A test subject: local-space bounds plus a world transform.
///
/// Bounds are brought to world space fresh on every classification,
/// the same way a scene would read a collider's current bounds.
struct Target {
    name: String,
    bounds: Aabb,
    world: Mat4,
}

fn build_targets(count: usize) -> Vec<Target> {
    let mut targets = Vec::with_capacity(count + 2);

    // Ring of unit cubes around the origin
    let unit = Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5));
    for i in 0..count {
        let angle = i as f32 * std::f32::consts::TAU / count as f32;
        let position = Vec3::new(angle.cos() * 12.0, 0.5, angle.sin() * 12.0);
        targets.push(Target {
            name: format!("cube_{:02}", i),
            bounds: unit,
            world: Mat4::from_translation(position),
        });
    }

    // One cube at the center, visible from every orbit position
    targets.push(Target {
        name: "center".to_string(),
        bounds: unit,
        world: Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0)),
    });

    // A wide ground slab that straddles the view boundary most of the time
    targets.push(Target {
        name: "ground".to_string(),
        bounds: Aabb::new(Vec3::new(-30.0, -1.0, -30.0), Vec3::new(30.0, 0.0, 30.0)),
        world: Mat4::IDENTITY,
    });

    targets
}

fn orbit_pose(tick: u32, ticks: u32) -> CameraPose {
    let angle = tick as f32 * std::f32::consts::TAU / ticks as f32;
    let eye = Vec3::new(angle.cos() * 20.0, 6.0, angle.sin() * 20.0);
    CameraPose::look_at(eye, Vec3::ZERO, Vec3::Y)
}

fn state_label(state: Containment) -> ColoredString {
    match state {
        Containment::Inside => "inside".blue(),
        Containment::Intersect => "intersect".green(),
        Containment::Outside => "outside".red(),
    }
}

/// Log the six extracted planes of the starting frustum.
fn report_planes(frustum: &Frustum) {
    for (name, plane) in PLANE_NAMES.iter().zip(frustum.planes.iter()) {
        cull_debug!(
            SOURCE,
            "{:6} plane: normal ({:+.3}, {:+.3}, {:+.3}), d {:+.3}",
            name,
            plane.normal.x,
            plane.normal.y,
            plane.normal.z,
            plane.d
        );
    }
}

fn main() -> Result<()> {
    let config = HarnessConfig::from_args(std::env::args())?;
    let params = PerspectiveParams::new(60.0, 16.0 / 9.0, 0.1, 40.0)?;

    let targets = build_targets(config.targets);
    let mut states: Vec<Option<Containment>> = vec![None; targets.len()];

    cull_info!(
        SOURCE,
        "monitoring {} targets for {} ticks (fov {} deg, near {}, far {})",
        targets.len(),
        config.ticks,
        params.fov_y_degrees,
        params.near,
        params.far
    );
    report_planes(&Frustum::from_perspective(&params, &orbit_pose(0, config.ticks)));

    for tick in 0..config.ticks {
        let pose = orbit_pose(tick, config.ticks);
        let frustum = Frustum::from_perspective(&params, &pose);

        for (target, state) in targets.iter().zip(states.iter_mut()) {
            let world_bounds = target.bounds.transformed(&target.world);
            let result = frustum.classify_aabb(&world_bounds);

            if *state != Some(result) {
                cull_info!(
                    SOURCE,
                    "tick {:3}: {} is now {}",
                    tick,
                    target.name,
                    state_label(result)
                );
                *state = Some(result);
            }
        }
    }

    let (mut inside, mut intersect, mut outside) = (0, 0, 0);
    for state in states.iter().flatten() {
        match state {
            Containment::Inside => inside += 1,
            Containment::Intersect => intersect += 1,
            Containment::Outside => outside += 1,
        }
    }
    cull_info!(
        SOURCE,
        "final states: {} {}, {} {}, {} {}",
        inside,
        "inside".blue(),
        intersect,
        "intersect".green(),
        outside,
        "outside".red()
    );

    Ok(())
}
