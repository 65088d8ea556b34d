use gridlet::prelude::*;

/// Zoom step of the on-screen +/- buttons
const ZOOM_INCREMENT: f64 = 1.0;

/// Rough visible bounds of a 390x844 pt screen centred on `center`
fn screen_bounds(center: LatLng, zoom: f64) -> LatLngBounds {
    let (width, height) = (390.0, 844.0);
    let lng_per_px = 360.0 / (256.0 * 2_f64.powf(zoom));
    let lat_per_px = lng_per_px * center.lat.to_radians().cos();
    LatLngBounds::from_coords(
        center.lat - lat_per_px * height / 2.0,
        center.lng - lng_per_px * width / 2.0,
        center.lat + lat_per_px * height / 2.0,
        center.lng + lng_per_px * width / 2.0,
    )
}

/// Drives an overlay session without any map SDK, printing what a host would draw
fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Gridlet headless example");
    println!("========================");

    let tokyo_station = LatLng::new(35.6812, 139.7671);
    let mut session = OverlaySession::new(GridOptions::default(), MemoryStyle::new())?;

    // Zoom out from street level to the suppression threshold and back.
    let mut zoom = 20.0;
    while zoom >= 9.0 {
        session.handle(OverlayEvent::CameraChanged {
            zoom,
            bounds: screen_bounds(tokyo_station, zoom),
        })?;
        let lines = session
            .target()
            .source(gridlet::constants::GRID_SOURCE_ID)
            .map(|source| source.features().len())
            .unwrap_or(0);
        println!(
            "   zoom {:>4.1}: {:<12} {} lines",
            zoom,
            session.label().unwrap_or("(no grid)"),
            lines
        );
        zoom -= ZOOM_INCREMENT;
    }

    let zoom = 17.0;
    session.handle(OverlayEvent::CameraChanged {
        zoom,
        bounds: screen_bounds(tokyo_station, zoom),
    })?;

    println!("\nSelecting the cell under Tokyo Station");
    session.handle(OverlayEvent::SelectCellAt(tokyo_station))?;
    if let Some(cell) = session.engine().highlighted_cell() {
        println!("   {}", GeoJson::from(cell).to_json_string()?);
    }

    println!("\nRouting to Tokyo Tower");
    let tokyo_tower = LatLng::new(35.6586, 139.7454);
    session.handle(OverlayEvent::RouteTo {
        origin: tokyo_station,
        destination: tokyo_tower,
    })?;
    if let Some(route) = session.route().active() {
        println!("   straight-line distance {:.0} m", route.length_meters());
    }
    session.handle(OverlayEvent::CancelRoute)?;

    let style = session.into_target();
    println!("\nFinal style layers:");
    for layer in style.layers() {
        println!("   {} ({}) <- {}", layer.id, layer.kind, layer.source);
    }

    Ok(())
}
