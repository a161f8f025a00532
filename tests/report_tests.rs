use shift_roster::{
    RosterEntry, Shift, TaskGroup, Vocabulary, WorkWeek, sort_entries, summarize, zone_for,
};

fn entry(day: &str, code: &str, workers: &[&str]) -> RosterEntry {
    let group = TaskGroup {
        code: code.to_string(),
        zone: zone_for(code),
        workers: workers.iter().map(|w| w.to_string()).collect(),
    };
    RosterEntry::build(day, Shift::Afternoon, &group)
}

#[test]
fn entries_sort_by_weekday_then_zone() {
    let mut entries = vec![
        entry("MARTES", "SECO", &["A"]),
        entry("DOMINGO", "T", &["B"]),
        entry("LUNES", "N", &["C"]),
        entry("SÁBADO", "T", &["D"]),
        entry("MARTES", "AA-AG", &["E"]),
        entry("LUNES", "T", &["F"]),
        entry("LUNES", "H", &["G"]),
    ];
    sort_entries(&mut entries);

    let order: Vec<(&str, &str, &str)> = entries
        .iter()
        .map(|e| (e.day.as_str(), e.zone.as_str(), e.workers.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("LUNES", "Carnes", "C"),
            ("LUNES", "Carnes", "G"),
            ("LUNES", "Congelado", "F"),
            ("MARTES", "Fiambreria", "E"),
            ("MARTES", "Seco", "A"),
            ("SÁBADO", "Congelado", "D"),
            ("DOMINGO", "Congelado", "B"),
        ]
    );
}

#[test]
fn weekday_rank_puts_unknown_days_last() {
    assert_eq!(WorkWeek::rank("LUNES"), 1);
    assert_eq!(WorkWeek::rank("MIÉRCOLES"), 3);
    assert_eq!(WorkWeek::rank("SÁBADO"), 6);
    assert_eq!(WorkWeek::rank("DOMINGO"), 7);
    assert_eq!(WorkWeek::rank("lunes"), 7);
}

#[test]
fn afternoon_entry_uses_afternoon_times() {
    let e = entry("JUEVES", "R", &["LUIS ROJAS", "ÓSCAR NÚÑEZ"]);
    assert_eq!(e.shift, "Tarde");
    assert_eq!(e.workers, "Luis Rojas / Óscar Núñez");
    assert_eq!(
        [
            e.start_time.as_str(),
            e.break_start_time.as_str(),
            e.break_end_time.as_str(),
            e.end_time.as_str()
        ],
        ["14:10", "18:40", "19:10", "21:55"]
    );
    assert_eq!(e.worker_names().collect::<Vec<_>>(), vec!["Luis Rojas", "Óscar Núñez"]);
}

#[test]
fn morning_times_match_table() {
    let times = Shift::Morning.times().formatted();
    assert_eq!(times, ["06:40", "10:30", "11:00", "14:10"].map(String::from));
}

#[test]
fn unknown_code_maps_to_unknown_zone() {
    assert_eq!(zone_for("ZZ"), "Unknown");
    assert_eq!(zone_for("V1-V2 Y1-Y2"), "Panaderia");
    assert_eq!(zone_for("W1-W4 Z1-Z5"), "Vegetales");
}

#[test]
fn summary_lists_codes_without_entries() {
    let vocabulary = Vocabulary::for_shift(Shift::Afternoon).unwrap();
    let entries = vec![
        entry("LUNES", "T", &["A"]),
        entry("LUNES", "SECO", &["B"]),
        entry("MARTES", "T", &["C"]),
    ];
    let summaries = summarize(["LUNES", "MARTES"], &entries, &vocabulary);

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].entry_count, 2);
    assert_eq!(summaries[0].pending_codes.len(), vocabulary.len() - 2);
    assert!(!summaries[0].pending_codes.contains(&"T".to_string()));
    assert!(summaries[0].pending_codes.contains(&"P".to_string()));
    assert!(!summaries[0].pending_codes.contains(&"EKONO".to_string()));

    assert_eq!(summaries[1].entry_count, 1);
    assert!(summaries[1].pending_codes.contains(&"SECO".to_string()));
    assert!(
        summaries[1]
            .to_cli_summary()
            .starts_with("MARTES: 1 asignaciones | pendientes: P, R, U, SECO")
    );
}

#[test]
fn summaries_follow_requested_day_order() {
    let vocabulary = Vocabulary::from_codes(["T", "SECO"]).unwrap();
    let mut entries = vec![
        entry("MARTES", "T", &["C"]),
        entry("LUNES", "SECO", &["B"]),
        entry("LUNES", "T", &["A"]),
    ];
    sort_entries(&mut entries);
    let summaries = summarize(["LUNES", "MARTES", "JUEVES"], &entries, &vocabulary);

    let days: Vec<&str> = summaries.iter().map(|s| s.day.as_str()).collect();
    assert_eq!(days, vec!["LUNES", "MARTES", "JUEVES"]);
    assert_eq!(summaries[0].entry_count, 2);
    assert!(summaries[0].pending_codes.is_empty());
    assert_eq!(summaries[0].to_cli_summary(), "LUNES: 2 asignaciones");
    assert_eq!(summaries[1].pending_codes, vec!["SECO".to_string()]);
    assert_eq!(summaries[2].entry_count, 0);
    assert_eq!(
        summaries[2].to_cli_summary(),
        "JUEVES: 0 asignaciones | pendientes: T, SECO"
    );
}
