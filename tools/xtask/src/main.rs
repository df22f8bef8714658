//! # xtask - Автоматизация сборки проекта
//!
//! См. [`HELP_TEXT`] для списка команд.

use anyhow::{Result, bail};
use xshell::{Shell, cmd};

/// Текст справки для команды xtask.
pub const HELP_TEXT: &str = r#"xtask

Использование:
  cargo run -p xtask -- <команда> [аргументы]

Команды:
  help                 Показать это сообщение
  fmt                  Запустить rustfmt
  fmt-check            Проверить форматирование (CI)
  clippy               Запустить clippy (воркспейс, -D warnings)
  test                 Запустить тесты (воркспейс, включая doctests)
  ci                   Запустить fmt-check + clippy + test
  convert <файл>       Сконвертировать экспорт маркеров через yt-chapters
"#;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;

    match cmd.as_str() {
        "help" | "-h" | "--help" => help(),
        "fmt" => Ok(cmd!(sh, "cargo fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo fmt --all -- --check").run()?),
        "clippy" => clippy(&sh),
        "test" => test(&sh),
        "ci" => {
            cmd!(sh, "cargo fmt --all -- --check").run()?;
            clippy(&sh)?;
            test(&sh)
        }
        "convert" => {
            let Some(input) = args.next() else {
                bail!("Не указан файл экспорта\n\nЗапустите: cargo run -p xtask -- convert <файл>");
            };
            let rest: Vec<String> = args.collect();
            Ok(cmd!(sh, "cargo run -q -p converter -- --input {input} {rest...}").run()?)
        }
        other => bail!("Неизвестная команда: {other}\n\nЗапустите: cargo run -p xtask -- help"),
    }
}

/// Показать сообщение справки.
fn help() -> Result<()> {
    println!("{HELP_TEXT}");
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo test --workspace").run()?;
    Ok(())
}
