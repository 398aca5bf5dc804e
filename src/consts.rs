//! Default values used when the environment does not override them

pub const LOG_FILE: &str = "./jobform.log"; // Fichier de log de l'application
pub const LOG_LEVEL: &str = "info"; // Niveau de log par défaut

pub const LOG_FILE_VAR: &str = "JOBFORM_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "JOBFORM_LOG_LEVEL";
