use crate::cli::commands::row_index;
use crate::cli::parser::Commands;
use crate::core::editor::{EditorState, Field, RowEditor};
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::models::WorkSession;
use crate::ui::messages::{error, info, success, warning};
use chrono::Datelike;
use std::io::{self, Write};

pub fn handle(cmd: &Commands, state: &mut AppState) -> AppResult<()> {
    if let Commands::Edit {
        month,
        row,
        date,
        start,
        duration,
        description,
        fast,
        interactive,
    } = cmd
    {
        let current = {
            let m = state.year.month_mut(*month)?;
            let index = row_index(m, *row)?;
            m.sessions[index].clone()
        };

        let mut editor = RowEditor::new(&current, *fast);
        let field = editor.begin()?;

        if *interactive {
            prompt_fields(&mut editor, field)?;
        } else {
            let values = [date, start, duration, description];
            apply_values(&mut editor, field, |f| values[f as usize].as_deref())?;
        }

        let Some(updated) = editor.finish() else {
            info("Edit cancelled, nothing changed.");
            return Ok(());
        };

        store(state, *month, *row, updated)?;
        state.save()?;
        success(format!("Row {row} of month {month} updated."));
    }
    Ok(())
}

/// Commit the given values, skip the rest.
fn apply_values<'a>(
    editor: &mut RowEditor,
    mut field: Field,
    value: impl Fn(Field) -> Option<&'a str>,
) -> AppResult<()> {
    loop {
        let next = match value(field) {
            Some(v) => editor.commit(v)?,
            None => editor.skip()?,
        };
        match next {
            EditorState::EditingField(f) => field = f,
            _ => return Ok(()),
        }
    }
}

/// Ask for every field on stdin. Empty input keeps the value, `q` or end of
/// input cancels, invalid input asks again.
fn prompt_fields(editor: &mut RowEditor, mut field: Field) -> AppResult<()> {
    loop {
        print!("{field} [{}]: ", current_value(editor.draft(), field));
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 || line.trim() == "q" {
            editor.cancel();
            return Ok(());
        }

        let next = if line.trim().is_empty() {
            editor.skip()
        } else {
            editor.commit(&line)
        };

        match next {
            Ok(EditorState::EditingField(f)) => field = f,
            Ok(_) => return Ok(()),
            Err(e) => error(e),
        }
    }
}

fn current_value(s: &WorkSession, field: Field) -> String {
    match field {
        Field::Date => s.date.format("%Y-%m-%d").to_string(),
        Field::StartTime => s.start_time.format("%H:%M").to_string(),
        Field::Duration => s.minutes().to_string(),
        Field::Description => s.description.clone(),
    }
}

/// Write the edited row back, moving it when its date now points to
/// another month of the year.
fn store(state: &mut AppState, month: u32, row: usize, updated: WorkSession) -> AppResult<()> {
    let target = updated.date.month();
    let m = state.year.month_mut(month)?;
    let index = row_index(m, row)?;

    if target == month {
        *m.session_mut(index)? = updated;
        m.sort();
        return Ok(());
    }

    m.remove(index)?;
    warning(format!("Session moved to month {target}."));
    let dest = state.year.month_mut(target)?;
    dest.add(updated);
    dest.sort();
    Ok(())
}
