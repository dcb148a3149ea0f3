use crate::infra::{InMemoryAlertFlags, LatestSnapshotCache, LoggingNotifier};
use carewatch::error::AppError;
use carewatch::monitors::cognitive::{
    FactorTable, GuidanceBundle, GuidanceSelector, RiskEvaluator, ScreeningReport,
    ScreeningService, SensorSnapshot,
};
use carewatch::monitors::feeds::{parse_snapshot_history, HistoryEntry};
use carewatch::monitors::warehouse::{WarehouseAlertService, WarehouseReading};
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ScreenArgs {
    /// Heart rate in BPM
    #[arg(long)]
    pub(crate) hr: Option<f64>,
    /// Blood oxygen saturation in percent
    #[arg(long)]
    pub(crate) spo2: Option<f64>,
    /// Blood pressure as systolic/diastolic (display only)
    #[arg(long)]
    pub(crate) bp: Option<String>,
    /// Balance angle
    #[arg(long)]
    pub(crate) angle: Option<f64>,
    /// Movement acceleration in g
    #[arg(long)]
    pub(crate) accel: Option<f64>,
    /// Energy level
    #[arg(long)]
    pub(crate) eng: Option<f64>,
    /// Body temperature in °C
    #[arg(long)]
    pub(crate) temp: Option<f64>,
    /// Ambient humidity in percent
    #[arg(long)]
    pub(crate) hum: Option<f64>,
    /// Replay a vitals history CSV instead of a single reading
    #[arg(
        long,
        conflicts_with_all = ["hr", "spo2", "bp", "angle", "accel", "eng", "temp", "hum"]
    )]
    pub(crate) csv: Option<PathBuf>,
    /// JSON factor table to use instead of the reference weights
    #[arg(long)]
    pub(crate) factor_table: Option<PathBuf>,
    /// Print full screening reports as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScreenArgs {
    fn snapshot(&self) -> SensorSnapshot {
        let defaults = SensorSnapshot::default();
        SensorSnapshot {
            heart_rate: self.hr.unwrap_or(defaults.heart_rate),
            spo2: self.spo2.unwrap_or(defaults.spo2),
            blood_pressure: self.bp.clone().unwrap_or(defaults.blood_pressure),
            angle: self.angle.unwrap_or(defaults.angle),
            acceleration: self.accel.unwrap_or(defaults.acceleration),
            energy: self.eng.unwrap_or(defaults.energy),
            temperature: self.temp.unwrap_or(defaults.temperature),
            humidity: self.hum.unwrap_or(defaults.humidity),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct GuidanceArgs {
    /// Tier label: Critical, High, Moderate, Low-Moderate or Low
    #[arg(long)]
    pub(crate) tier: String,
    /// Print the guidance bundle as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional vitals history CSV to replay after the reference readings
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Skip the warehouse alerting portion of the demo
    #[arg(long)]
    pub(crate) skip_warehouse: bool,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let table = match &args.factor_table {
        Some(path) => FactorTable::from_path(path)?,
        None => FactorTable::reference().clone(),
    };

    let cache = Arc::new(LatestSnapshotCache::default());
    let service = ScreeningService::new(cache.clone(), RiskEvaluator::new(table));

    let readings = match &args.csv {
        Some(path) => load_history(path)?,
        None => vec![HistoryEntry {
            recorded_at: None,
            snapshot: args.snapshot(),
        }],
    };

    for (index, entry) in readings.into_iter().enumerate() {
        let label = entry
            .recorded_at
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| format!("reading #{}", index + 1));
        cache.store(entry.snapshot);
        let report = service.screen()?;

        if args.json {
            print_json(&report);
        } else {
            render_screening(&label, &report);
        }
    }

    Ok(())
}

pub(crate) fn run_guidance(args: GuidanceArgs) -> Result<(), AppError> {
    let bundle = GuidanceSelector::new().select_by_label(&args.tier);
    if args.json {
        print_json(&bundle);
    } else {
        render_guidance(&args.tier, &bundle);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        csv,
        skip_warehouse,
    } = args;

    println!("CareWatch screening demo");
    let cache = Arc::new(LatestSnapshotCache::default());
    let service = ScreeningService::new(cache.clone(), RiskEvaluator::reference());

    for (label, snapshot) in reference_readings() {
        cache.store(snapshot);
        let report = service.screen()?;
        render_screening(label, &report);
    }

    if let Some(path) = csv {
        println!("\nHistory replay: {}", path.display());
        for entry in load_history(&path)? {
            let result = service.evaluator().evaluate(&entry.snapshot);
            let when = entry
                .recorded_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_else(|| "undated".to_string());
            println!(
                "- {}: {:.1}% ({}) {} factor(s)",
                when,
                result.risk_percentage,
                result.risk_level.label(),
                result.total_factors
            );
        }
    }

    if skip_warehouse {
        return Ok(());
    }

    println!("\nWarehouse alerting demo");
    let notifier = Arc::new(LoggingNotifier::default());
    let flags = Arc::new(InMemoryAlertFlags::default());
    let warehouse = WarehouseAlertService::new(notifier.clone(), flags.clone(), "warehouse-demo");

    for (step, dispenser) in ["0", "1", "1", "2", "0"].into_iter().enumerate() {
        let reading = demo_warehouse_reading(dispenser);
        match warehouse.observe(reading) {
            Ok(report) => println!(
                "- step {}: dispenser {} -> notify={} flag={:?}",
                step + 1,
                dispenser,
                report.outcome.notify,
                report.outcome.alert_flag
            ),
            Err(err) => println!("- step {}: alert handling failed: {}", step + 1, err),
        }
    }

    for query in ["Temperature", "dispensor", "Weight3"] {
        match warehouse.answer(query) {
            Ok(reply) => println!("- query {query:?} -> {reply}"),
            Err(err) => println!("- query {query:?} failed: {err}"),
        }
    }

    println!(
        "Messages sent: {} | remote alert flag: {:?}",
        notifier.messages().len(),
        flags.current()
    );

    Ok(())
}

fn load_history(path: &Path) -> Result<Vec<HistoryEntry>, AppError> {
    let file = File::open(path)?;
    Ok(parse_snapshot_history(BufReader::new(file))?)
}

fn reference_readings() -> [(&'static str, SensorSnapshot); 2] {
    [
        (
            "positive reference",
            SensorSnapshot {
                heart_rate: 70.0,
                spo2: 94.0,
                blood_pressure: "120/80".to_string(),
                angle: 0.10,
                acceleration: 0.75,
                energy: 5.0,
                temperature: 36.5,
                humidity: 60.0,
            },
        ),
        (
            "negative reference",
            SensorSnapshot {
                heart_rate: 75.0,
                spo2: 98.0,
                blood_pressure: "118/76".to_string(),
                angle: 0.5,
                acceleration: 1.2,
                energy: 9.0,
                temperature: 37.0,
                humidity: 40.0,
            },
        ),
    ]
}

fn demo_warehouse_reading(dispenser: &str) -> WarehouseReading {
    let text = |value: &str| Some(value.to_string());
    WarehouseReading {
        dispenser: text(dispenser),
        door: text("0"),
        fan: text("1"),
        gas: text("0"),
        humidity: text("48"),
        pin: text("1234"),
        temperature: text("26.5"),
        weight1: text("2.4"),
        weight2: text("3.1"),
        alert: text(if dispenser == "0" { "0" } else { "1" }),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON output unavailable: {err}"),
    }
}

fn render_screening(label: &str, report: &ScreeningReport) {
    let evaluation = &report.evaluation;
    println!("\nScreening: {label} ({})", evaluation.timestamp_label());
    println!(
        "- Risk {:.1}% ({}) | stage {} | detected: {}",
        evaluation.risk_percentage,
        evaluation.risk_level.label(),
        evaluation.disease_stage.label(),
        if evaluation.detected { "yes" } else { "no" }
    );
    println!(
        "- Vitals: heart rate {} | SpO2 {} | temperature {} | BP {}",
        report.vitals.heart_rate.label(),
        report.vitals.spo2.label(),
        report.vitals.temperature.label(),
        report.snapshot.blood_pressure
    );

    if evaluation.matched_factors.is_empty() {
        println!("- Matched factors: none");
    } else {
        println!("- Matched factors:");
        for factor in &evaluation.matched_factors {
            println!("    - {}: {} (band {})", factor.name, factor.value, factor.band);
        }
    }
    println!("{}", report.summary);

    if let Some(guidance) = &report.guidance {
        println!("Recommended actions: {}", guidance.urgency);
        for medication in &guidance.medications {
            println!("    - {medication}");
        }
    }
}

fn render_guidance(label: &str, bundle: &GuidanceBundle) {
    if bundle.is_fallback() {
        println!("Guidance for {label}: general monitoring");
    } else {
        println!("Guidance for {label}");
    }
    println!("Urgency: {}", bundle.urgency);

    let sections = [
        ("Medications", &bundle.medications, bundle.notes.medications),
        ("Memory aids", &bundle.memory_aids, bundle.notes.memory_aids),
        (
            "Caregiver support",
            &bundle.caregiver_support,
            bundle.notes.caregiver_support,
        ),
        ("Lifestyle", &bundle.lifestyle, bundle.notes.lifestyle),
    ];
    for (title, items, note) in sections {
        println!("\n{title}: {note}");
        for item in items {
            println!("- {item}");
        }
    }
    println!("\n{}", bundle.notes.monitoring);

    if let Some(plan) = &bundle.emergency_plan {
        println!("\nEmergency plan: {}", plan.trigger);
        for step in plan.steps {
            println!("- {}: {}", step.topic, step.detail);
        }
        println!("{}", plan.note);
    }

    println!("\nSupport resources");
    for resource in &bundle.resources {
        println!("- {}: {}", resource.topic, resource.detail);
    }
}
