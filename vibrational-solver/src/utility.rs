use serde::Serialize;
use std::{
    fs::{File, create_dir_all},
    io::Write,
    path::PathBuf,
};

fn data_path(filename: &str, extension: &str) -> Result<PathBuf, std::io::Error> {
    let mut path = std::env::current_dir()?;
    path.push("data");
    path.push(filename);
    path.set_extension(extension);

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            create_dir_all(parent)?;
            println!("created path {}", parent.display());
        }
    }

    Ok(path)
}

/// Saves same-length columns as a tab-separated table under `data/`.
pub fn save_data(filename: &str, header: &str, data: &[Vec<f64>]) -> Result<(), std::io::Error> {
    let n = data.first().map_or(0, |column| column.len());
    for column in data {
        assert!(column.len() == n, "Same length data allowed only")
    }

    let mut buf = header.to_string();
    for i in 0..n {
        let line = data
            .iter()
            .fold(String::new(), |s, column| s + &format!("\t{:e}", column[i]));

        buf.push_str(&format!("\n{}", line.trim()));
    }

    let path = data_path(filename, "dat")?;
    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(())
}

/// Saves a serializable record as json under `data/`.
pub fn save_serialize(filename: &str, data: &impl Serialize) -> Result<(), std::io::Error> {
    let buf = serde_json::to_string_pretty(data)?;

    let path = data_path(filename, "json")?;
    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(())
}
