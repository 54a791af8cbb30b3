//! shell — interactive menu loop over a Session.
//!
//! Тонкая оболочка: читает выбор пункта меню, триммит ввод, вызывает операции
//! Session и печатает результат. Сохранение на выходе делает вызывающий код
//! (по ShellExit), чтобы ошибку save можно было вернуть наружу.
//!
//! Меню:
//!   1. add   2. search   3. update   4. delete
//!   5. list  6. stats    7. exit

use std::io::{self, BufRead, Write};

use crate::catalog::{Order, Statistics};
use crate::session::Session;

const MENU: &str = "
    1. add
    2. search
    3. update
    4. delete
    5. list
    6. statistics
    7. exit
";

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// User picked "exit".
    Exit,
    /// Input stream closed.
    Eof,
}

/// `word: <w>, meaning: <m>`
pub fn format_entry(word: &str, meaning: &str) -> String {
    format!("word: {word}, meaning: {meaning}")
}

/// Statistics block as printed by the menu and by `wordbook stats`.
pub fn format_statistics(st: &Statistics) -> String {
    let mut s = String::new();
    s.push_str(&format!("words stored: {}\n", st.count));
    s.push_str(&format!("longest word: {}\n", st.longest_word));
    s.push_str("words by length (desc):");
    for w in &st.words_by_length_desc {
        s.push('\n');
        s.push_str(w);
    }
    s
}

pub struct Shell<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Trimmed line after printing `label`; None on EOF.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        // байты + lossy: не-UTF-8 ввод не закрывает меню
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn print_entries(&mut self, entries: &[(String, String)]) -> io::Result<()> {
        for (w, m) in entries {
            writeln!(self.out, "{}", format_entry(w, m))?;
        }
        Ok(())
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self, session: &mut Session) -> io::Result<ShellExit> {
        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(choice) = self.prompt("select: ")? else {
                return Ok(ShellExit::Eof);
            };

            match choice.as_str() {
                "1" => {
                    let Some(word) = self.prompt("word: ")? else {
                        return Ok(ShellExit::Eof);
                    };
                    let Some(meaning) = self.prompt("meaning: ")? else {
                        return Ok(ShellExit::Eof);
                    };
                    match session.add(&word, &meaning) {
                        Ok(o) => writeln!(self.out, "{}", o.message())?,
                        Err(r) => writeln!(self.out, "{r}")?,
                    }
                }
                "2" => {
                    let Some(keyword) = self.prompt("keyword: ")? else {
                        return Ok(ShellExit::Eof);
                    };
                    let hits = session.search(&keyword);
                    if hits.is_empty() {
                        writeln!(self.out, "word not found")?;
                    } else {
                        self.print_entries(&hits)?;
                    }
                }
                "3" => {
                    let Some(word) = self.prompt("word to update: ")? else {
                        return Ok(ShellExit::Eof);
                    };
                    let Some(meaning) = self.prompt("new meaning: ")? else {
                        return Ok(ShellExit::Eof);
                    };
                    match session.update(&word, &meaning) {
                        Ok(o) => writeln!(self.out, "{}", o.message())?,
                        Err(r) => writeln!(self.out, "{r}")?,
                    }
                }
                "4" => {
                    let Some(word) = self.prompt("word to delete: ")? else {
                        return Ok(ShellExit::Eof);
                    };
                    match session.delete(&word) {
                        Ok(o) => writeln!(self.out, "{}", o.message())?,
                        Err(r) => writeln!(self.out, "{r}")?,
                    }
                }
                "5" => {
                    writeln!(self.out, "1. ascending\n2. descending")?;
                    let Some(order) = self.prompt("select order: ")? else {
                        return Ok(ShellExit::Eof);
                    };
                    // всё, кроме "1", — по убыванию
                    let order = Order::from_ascending(order == "1");
                    let entries = session.list(order);
                    self.print_entries(&entries)?;
                }
                "6" => {
                    let st = session.statistics();
                    writeln!(self.out, "{}", format_statistics(&st))?;
                }
                "7" => return Ok(ShellExit::Exit),
                _ => writeln!(self.out, "invalid choice, try again")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordbookConfig;
    use std::io::Cursor;

    fn mem_session() -> Session {
        // lock=false, save_on_drop=false: путь не трогаем
        let cfg = WordbookConfig::default()
            .with_path(std::env::temp_dir().join("wordbook-shell-unit-never-written.json"))
            .with_lock(false)
            .with_save_on_drop(false);
        Session::open_with_config(cfg).unwrap()
    }

    fn drive(session: &mut Session, script: &str) -> (ShellExit, String) {
        let mut sh = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let exit = sh.run(session).unwrap();
        (exit, String::from_utf8(sh.into_output()).unwrap())
    }

    #[test]
    fn add_search_and_exit() {
        let mut s = mem_session();
        let (exit, out) = drive(&mut s, "1\n  Apple \n fruit \n2\napp\n7\n");
        assert_eq!(exit, ShellExit::Exit);
        assert!(out.contains("word: apple, meaning: fruit"));
        assert!(s.is_dirty());
    }

    #[test]
    fn search_miss_and_invalid_choice() {
        let mut s = mem_session();
        let (exit, out) = drive(&mut s, "2\nzzz\n9\n");
        assert_eq!(exit, ShellExit::Eof);
        assert!(out.contains("word not found"));
        assert!(out.contains("invalid choice, try again"));
    }

    #[test]
    fn invalid_utf8_choice_keeps_menu_running() {
        let mut s = mem_session();
        let input = b"\xff\xfe\n1\n\xc3word\nm\n7\n".to_vec();
        let mut sh = Shell::new(Cursor::new(input), Vec::new());
        let exit = sh.run(&mut s).unwrap();
        let out = String::from_utf8(sh.into_output()).unwrap();
        assert_eq!(exit, ShellExit::Exit);
        assert!(out.contains("invalid choice, try again"));
        assert_eq!(s.catalog().len(), 1);
        assert!(s.catalog().contains("\u{fffd}word"));
    }

    #[test]
    fn duplicate_update_delete_messages() {
        let mut s = mem_session();
        let (_, out) = drive(
            &mut s,
            "1\na\nx\n1\nA\ny\n3\na\nz\n4\nb\n4\na\n7\n",
        );
        assert!(out.contains("already registered"));
        assert!(out.contains("meaning updated"));
        assert!(out.contains("word not found"));
        assert!(out.contains("word deleted"));
        assert!(s.catalog().is_empty());
    }

    #[test]
    fn list_descending_and_stats() {
        let mut s = mem_session();
        s.add("apple", "a").unwrap();
        s.add("fig", "f").unwrap();
        let (_, out) = drive(&mut s, "5\n2\n6\n7\n");
        let fig = out.find("word: fig").unwrap();
        let apple = out.find("word: apple").unwrap();
        assert!(fig < apple);
        assert!(out.contains("words stored: 2"));
        assert!(out.contains("longest word: apple"));
    }

    #[test]
    fn statistics_block() {
        let st = Statistics {
            count: 2,
            longest_word: "ab".into(),
            words_by_length_desc: vec!["ab".into(), "cd".into()],
        };
        assert_eq!(
            format_statistics(&st),
            "words stored: 2\nlongest word: ab\nwords by length (desc):\nab\ncd"
        );
    }
}
