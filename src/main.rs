//! Binary entry point: resolve the data files, load the Surah store, and run
//! the management menu on stdin/stdout until the user exits.
use std::io;

use env_logger::Env;
use hifz_manager::{run_app, App, Config, Console, StudentFile, SurahStore};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    config.ensure_data_dir()?;
    info!(
        "using surah file {} and student file {}",
        config.surah_file.display(),
        config.student_file.display()
    );

    let students = StudentFile::new(&config.student_file);
    let store = SurahStore::open(&config.surah_file, students);
    let mut app = App::new(store);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout()).with_color(config.color);
    run_app(&mut app, &mut console)
}
