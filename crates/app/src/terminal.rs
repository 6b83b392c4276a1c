//! Line-based terminal front end for a quiz session.

use std::io::{self, BufRead, Write};

use quiz_core::model::Choice;
use services::{ChoiceMark, QuestionView, QuizSession, ResultView};

const TITLE: &str = "難問ドラえもん三択クイズ";

/// One line of user input, interpreted for the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Pick(Choice),
    Next,
    Quit,
    Invalid,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "q" | "quit" => Input::Quit,
            "" | "n" | "next" => Input::Next,
            raw => raw
                .parse::<u8>()
                .ok()
                .and_then(|n| Choice::new(n).ok())
                .map_or(Input::Invalid, Input::Pick),
        }
    }
}

/// Drive `session` from `input` until the player quits or input ends.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `out`.
pub fn run<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(
        out,
        "全{}問のクイズに挑戦! 正解だと思う選択肢の番号を入力しよう (q で終了)",
        session.total()
    )?;

    let mut line = String::new();
    loop {
        if session.is_finished() {
            if let Some(result) = session.result_view() {
                render_result(&mut out, &result)?;
            }
            write!(out, "もう一度遊ぶ? [y/N] ")?;
            out.flush()?;
            if !read_line(&mut input, &mut line)? {
                return Ok(());
            }
            if matches!(line.trim(), "y" | "yes") {
                session.restart();
                continue;
            }
            return Ok(());
        }

        render_question(&mut out, &session.question_view())?;
        out.flush()?;
        if !read_line(&mut input, &mut line)? {
            return Ok(());
        }

        match Input::parse(&line) {
            Input::Quit => return Ok(()),
            Input::Pick(choice) => match session.select_answer(choice) {
                Ok(record) if record.was_correct => writeln!(out, "正解！")?,
                Ok(_) => writeln!(out, "残念、不正解！")?,
                Err(err) => writeln!(out, "({err})")?,
            },
            Input::Next => {
                if let Err(err) = session.advance() {
                    writeln!(out, "({err})")?;
                }
            }
            Input::Invalid => writeln!(out, "1 から 3 の番号を入力してください")?,
        }
    }
}

/// Read one line into `buf`; returns false at end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut String) -> io::Result<bool> {
    buf.clear();
    Ok(input.read_line(buf)? > 0)
}

fn mark_symbol(mark: ChoiceMark) -> &'static str {
    match mark {
        ChoiceMark::Unmarked => " ",
        ChoiceMark::Correct => "○",
        ChoiceMark::Wrong => "×",
    }
}

fn render_question<W: Write>(out: &mut W, view: &QuestionView<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "第{}問", view.number)?;
    writeln!(out, "{}", view.prompt)?;
    for choice in &view.choices {
        writeln!(
            out,
            " {} {}. {}",
            mark_symbol(choice.mark),
            choice.choice,
            choice.text
        )?;
    }
    writeln!(out, "現在のスコア: {} / {}", view.score, view.total)?;

    if view.answered {
        let next = if view.is_last { "結果を見る" } else { "次へ" };
        write!(out, "[Enter] {next} > ")?;
    } else {
        write!(out, "> ")?;
    }
    Ok(())
}

fn render_result<W: Write>(out: &mut W, result: &ResultView<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "クイズ終了！")?;
    writeln!(
        out,
        "正解数: {} / {} ({:.0}%)",
        result.score, result.total, result.percentage
    )?;
    writeln!(out, "あなたは {} です", result.rank.title)?;
    writeln!(out, "{}", result.rank.comment)?;

    if !result.mistakes.is_empty() {
        writeln!(out, "間違えた問題:")?;
        for mistake in &result.mistakes {
            writeln!(
                out,
                "  - {} (あなたの答え: {} / 正解: {})",
                mistake.prompt, mistake.chosen, mistake.correct
            )?;
        }
    }
    Ok(())
}
