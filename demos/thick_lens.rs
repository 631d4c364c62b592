use optisim::{
    error::OptiResult,
    imaging_subject::{ImagingSubject, LightSource},
    nodes::{Lens, ThickLens, ThinLens},
    OpticalSystem,
};

fn main() -> OptiResult<()> {
    let mut system = OpticalSystem::new();
    system.add_light_source(LightSource::new(-20.0, 10.0))?;
    system.add("L1", ThinLens::new(10.0, 5.0)?)?;
    system.add("L2", ThickLens::new(30.0, 1.5, 5.0, -20.0, 25.0)?)?;

    // reshape both lenses
    system.modify_optical_object("L1", "x", 0.0)?;
    system.modify_optical_object("L1", "f", 10.0)?;
    system.modify_optical_object("L2", "n", 1.7)?;
    system.modify_optical_object("L2", "d", 3.0)?;
    system.modify_optical_object("L2", "r_left", 35.0)?;
    system.modify_optical_object("L2", "r_right", 40.0)?;

    for name in system.axial_order() {
        let element = system.element(name)?;
        println!("{name}: {element} (effective focal length {:.3})", element.f());
    }
    let image = system.calculate()?;
    for (i, image) in system.image_sequence().iter().enumerate() {
        println!("image {}: {image}", i + 1);
    }
    println!("final image at x = {:.3}, y = {:.3}", image.x(), image.y());
    Ok(())
}
