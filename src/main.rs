//! Spline-Bridge CLI.
//!
//! Design-Time-Werkzeug: liest ein Spline-JSON, baut den nativen Container
//! auf, loggt Kennzahlen pro Spline und exportiert optional wieder als
//! JSON. Ohne Ausgabepfad wird nichts geschrieben.

use anyhow::{bail, Context, Result};
use spline_bridge::shared::polyline_length;
use spline_bridge::{
    export_document, import_document, parse_spline_json, write_spline_json, DeformEvaluator,
    SplineContainer,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spline-Bridge v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(input_path) = args.next() else {
        bail!("Aufruf: spline-bridge <eingabe.json> [ausgabe.json] [scale]");
    };
    let output_path = args.next();
    let scale: f32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Ungueltiger Scale-Faktor: {raw}"))?,
        None => 1.0,
    };

    let json_content = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Eingabedatei nicht lesbar: {input_path}"))?;
    let document = parse_spline_json(&json_content)?;

    let mut container = SplineContainer::new();
    import_document(&document, scale, &mut container);

    let evaluator = DeformEvaluator::new(&container);
    for (index, spline) in container.splines.iter().enumerate() {
        let polyline = evaluator.sample_polyline(index);
        log::info!(
            "Spline {}: {} Knoten, {} Bogenlänge {:.2}, Polylinie {} Punkte ({:.2})",
            index,
            spline.knots.len(),
            if spline.closed {
                "geschlossen,"
            } else {
                "offen,"
            },
            spline.arc_length(),
            polyline.len(),
            polyline_length(&polyline)
        );
    }

    match output_path {
        Some(path) => {
            let exported = write_spline_json(&export_document(&container))?;
            std::fs::write(&path, exported)
                .with_context(|| format!("Ausgabedatei nicht schreibbar: {path}"))?;
            log::info!("Dokument exportiert nach {path}");
        }
        None => {
            log::info!("Kein Ausgabepfad angegeben, Export übersprungen");
        }
    }

    Ok(())
}
