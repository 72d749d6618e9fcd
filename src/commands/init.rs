use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# riskmap configuration

[input]
# Header of the column holding the worker's name.
name_column = "Nombre Completo del trabajador"

[report]
# Organizational unit printed in every per-worker report.
area = "Área por definir"

[output]
summary_filename = "resultados_evaluacion_psicosocial.csv"
reports_dirname = "resultados_individuales"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}
