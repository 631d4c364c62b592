use optisim::{
    error::OptiResult,
    imaging_subject::LightSource,
    nodes::ThinLens,
    reporter::SystemReport,
    OpticalSystem,
};
use std::{io, path::Path};

fn main() -> OptiResult<()> {
    let mut system = OpticalSystem::new();
    system.add_light_source(LightSource::new(0.0, 8.0))?;
    system.add("Lens_1", ThinLens::new(60.0, 30.0)?)?;
    system.add("Lens_2", ThinLens::new(90.0, 30.0)?)?;
    system.calculate()?;

    let report = SystemReport::new(&system);
    let mut stdout = io::stdout().lock();
    report.write_text(&mut stdout)?;
    report.write_image_list(&mut stdout)?;
    report.write_ray_table(&mut stdout)?;

    system.save(Path::new("./two_lens.json"))
}
