use engine::{
    Distribution, Division, DivisionRates, Level, LevelSettings, LevelTableEditor, RateConfig,
    SaveOutcome, distribute, to_csv, util,
};

fn levels(rates: &[f64]) -> Vec<Level> {
    rates
        .iter()
        .enumerate()
        .map(|(index, rate)| {
            let name = if index == 0 {
                "Strukturführer (S0)".to_string()
            } else {
                format!("Ebene {index}")
            };
            Level::new(name, *rate)
        })
        .collect()
}

fn config(level_rates: &[f64]) -> RateConfig {
    RateConfig {
        entry_rates: DivisionRates {
            life: 44.0,
            property_casualty: 22.5,
            health: 8.0,
        },
        overhead_rates: DivisionRates {
            life: 0.0,
            property_casualty: 0.0,
            health: 0.3,
        },
        levels: levels(level_rates),
    }
}

fn amounts(distribution: &Distribution) -> Vec<f64> {
    distribution
        .entries
        .iter()
        .map(|entry| (entry.amount * 100.0).round() / 100.0)
        .collect()
}

#[test]
fn life_scenario_seven_levels() {
    // 12500 at 44‰ gives a 550 pool; Ebene 6 keeps its 55, each sponsor
    // above earns the 5-point margin.
    let config = config(&[85.0, 80.0, 75.0, 70.0, 65.0, 60.0, 55.0]);
    let result = distribute(12_500.0, Division::Life, 6, &config, false);

    assert_eq!(result.entries.len(), 7);
    assert_eq!(
        amounts(&result),
        vec![27.50, 27.50, 27.50, 27.50, 27.50, 27.50, 302.50]
    );
    assert!((result.total_amount - 550.0).abs() < 1e-9);
    assert!((result.total_difference - 85.0).abs() < 1e-9);
}

#[test]
fn health_scenario_with_overhead() {
    // Monthly premium is annualized (x8) before the per-mille rates apply;
    // the overhead is paid on top of the pool.
    let config = config(&[100.0]);
    let result = distribute(500.0, Division::Health, 0, &config, true);

    assert!((result.entries[0].amount - 1.20).abs() < 1e-9);
    assert!((result.entries[1].amount - 32.0).abs() < 1e-9);
    assert!((result.total_amount - 33.20).abs() < 1e-9);
}

#[test]
fn property_casualty_scenario_leader_only() {
    let config = config(&[85.0, 80.0]);
    let result = distribute(10_000.0, Division::PropertyCasualty, 0, &config, false);

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].difference, 85.0);
    assert!((result.entries[0].amount - 2250.0 * 0.85).abs() < 1e-9);
}

#[test]
fn total_difference_telescopes_to_top_rate() {
    // Whatever the intermediate rates, a full chain pays out exactly the
    // structure leader's rate.
    let tables: [&[f64]; 3] = [
        &[85.0, 80.0, 75.0, 70.0, 65.0, 60.0, 55.0, 50.0, 45.0, 40.0],
        &[100.0, 99.5, 70.0, 12.0],
        &[60.0, 60.0, 60.0],
    ];
    for rates in tables {
        let config = config(rates);
        for pivot in 0..rates.len() {
            let result = distribute(1_000.0, Division::Life, pivot, &config, false);
            assert!(
                (result.total_difference - rates[0]).abs() < 1e-9,
                "pivot {pivot} of {rates:?}"
            );
        }
    }
}

#[test]
fn distribute_is_idempotent() {
    let config = config(&[85.0, 80.0, 75.0]);
    let first = distribute(9_999.99, Division::Life, 2, &config, true);
    let second = distribute(9_999.99, Division::Life, 2, &config, true);
    assert_eq!(first, second);
}

#[test]
fn keystroke_to_export_round_trip() {
    // The flow the screen drives: parse the sum field, compute, export.
    let sum = util::parse_sum("12500");
    let config = config(&[85.0, 80.0, 75.0, 70.0, 65.0, 60.0, 55.0]);
    let result = distribute(sum, Division::Life, 6, &config, false);
    let csv = to_csv(&result, sum, Division::Life).unwrap();

    assert!(csv.starts_with("Ebene,Satz (%),Differenz (%),Betrag (€)\n"));
    assert!(csv.contains("Ebene 6,55.0,55.0,302.50"));
    assert!(csv.contains("Gesamt,,85.0,550.00"));
    assert!(csv.ends_with("Sparte,,,Leben\n"));
}

#[test]
fn edited_table_feeds_the_engine() {
    // Edit, commit, distribute with the committed snapshot.
    let mut editor = LevelTableEditor::new(LevelSettings {
        levels: levels(&[85.0, 80.0, 75.0]),
        revenue_level: 2,
        visible_levels: 7,
    });
    editor.set_rate(0, 100.0);

    let settings = match editor.commit().unwrap() {
        SaveOutcome::Saved(settings) => settings,
        SaveOutcome::TotalMismatch { total } => panic!("unexpected mismatch: {total}"),
    };

    let config = RateConfig {
        levels: settings.levels,
        ..config(&[])
    };
    let result = distribute(1_000.0, Division::Life, settings.revenue_level, &config, false);
    assert!((result.total_difference - 100.0).abs() < 1e-9);
}
