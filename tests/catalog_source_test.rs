use anyhow::Result;
use gmm_advisor::{
    AdvisorEngine, AnswersFile, CatalogFile, CatalogSource, MotorCatalog, TripDuration, WaterType,
};
use std::io::Write;
use tempfile::TempDir;

fn builtin_as_toml() -> String {
    let mut out = String::new();
    for motor in MotorCatalog::builtin().iter() {
        out.push_str(&format!(
            concat!(
                "[[motors]]\nmodel = \"{}\"\npower_kw = {:?}\npower_hp = {:?}\n",
                "max_length_m = {:?}\nmax_weight_kg = {:?}\ncooling = \"{}\"\ntorque_nm = {:?}\n\n",
            ),
            motor.model,
            motor.power_kw,
            motor.power_hp,
            motor.max_length_m,
            motor.max_weight_kg,
            motor.cooling,
            motor.torque_nm
        ));
    }
    out
}

fn builtin_as_csv() -> String {
    let mut out =
        String::from("model,power_kw,power_hp,max_length_m,max_weight_kg,cooling,torque_nm\n");
    for motor in MotorCatalog::builtin().iter() {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            motor.model,
            motor.power_kw,
            motor.power_hp,
            motor.max_length_m,
            motor.max_weight_kg,
            motor.cooling,
            motor.torque_nm
        ));
    }
    out
}

#[test]
fn test_toml_and_csv_files_match_builtin() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let toml_path = temp_dir.path().join("motors.toml");
    let csv_path = temp_dir.path().join("motors.csv");
    std::fs::write(&toml_path, builtin_as_toml())?;
    std::fs::write(&csv_path, builtin_as_csv())?;

    let from_toml = CatalogFile::for_path(toml_path.to_str())?.load()?;
    let from_csv = CatalogFile::for_path(csv_path.to_str())?.load()?;

    assert_eq!(from_toml, MotorCatalog::builtin());
    assert_eq!(from_csv, MotorCatalog::builtin());
    Ok(())
}

#[test]
fn test_missing_catalog_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("absent.toml");

    let err = CatalogFile::for_path(path.to_str())?.load().unwrap_err();
    assert_eq!(err.exit_code(), 3);
    Ok(())
}

#[test]
fn test_custom_catalog_drives_recommendation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("small-range.csv");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "model,power_kw,power_hp,max_length_m,max_weight_kg,cooling,torque_nm")?;
    writeln!(file, "T2,2,6,6,1000,air,20")?;
    writeln!(file, "T4,4,11,9,2500,air,35")?;
    drop(file);

    let engine = AdvisorEngine::from_source(&CatalogFile::for_path(path.to_str())?)?;

    let answers_file = AnswersFile::from_toml_str(
        r#"
[boat]
length_m = 12.0
weight_kg = 2000.0

[usage]
water = "inland"
trip_duration = "4-8 uur"
"#,
    )?;
    let answers = answers_file.answers()?;
    assert_eq!(answers.water_type, WaterType::Inland);
    assert_eq!(answers.trip_duration, TripDuration::Between4And8h);

    // 12 m exceeds every entry, so the largest one is used.
    let rec = engine.advise(&answers)?;
    assert_eq!(rec.motor.model, "T4");
    // 1.8 kW over 6 h = 10.8 kWh, three units.
    assert_eq!(rec.battery_count, 3);
    assert_eq!(rec.estimated_endurance_hours, 6.7);
    Ok(())
}
