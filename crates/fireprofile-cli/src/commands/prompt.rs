//! Line-based prompts used when a URL has no matching rule and before
//! destructive edits. Generic over reader and writer so they can be tested.

use anyhow::Result;
use fireprofile_core::Profile;
use std::io::{BufRead, Write};

/// Ask the user to pick a profile by number or name.
///
/// Returns `None` when the user enters an empty line or input ends.
pub fn choose_profile<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    profiles: &[Profile],
    host: &str,
) -> Result<Option<String>> {
    writeln!(output, "No profile rule matches {}.", host)?;
    writeln!(output, "Select a profile:")?;
    for (i, profile) in profiles.iter().enumerate() {
        writeln!(output, "  {}) {}  ({})", i + 1, profile.name, profile.command)?;
    }

    loop {
        write!(output, "Profile [1-{}, empty to cancel]: ", profiles.len())?;
        output.flush()?;

        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(None);
        }

        let by_number = answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=profiles.len()).contains(n))
            .map(|n| &profiles[n - 1]);
        let by_name = || profiles.iter().find(|p| p.name == answer);

        if let Some(profile) = by_number.or_else(by_name) {
            return Ok(Some(profile.name.clone()));
        }

        writeln!(output, "'{}' is not one of the listed profiles.", answer)?;
    }
}

/// Ask a yes/no question. An empty answer or end of input picks `default`.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    loop {
        write!(output, "{} {} ", question, hint)?;
        output.flush()?;

        let answer = match read_answer(input)? {
            Some(answer) => answer.to_lowercase(),
            None => return Ok(default),
        };

        match answer.as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
}

/// Next trimmed line, or `None` at end of input
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn profiles() -> Vec<Profile> {
        vec![
            Profile::new("work", "firefox -P work"),
            Profile::new("personal", "firefox -P personal"),
        ]
    }

    fn choose(answers: &str) -> (Option<String>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let choice = choose_profile(&mut input, &mut output, &profiles(), "example.com").unwrap();
        (choice, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_choose_by_number() {
        let (choice, output) = choose("2\n");
        assert_eq!(choice.as_deref(), Some("personal"));
        assert!(output.contains("No profile rule matches example.com"));
        assert!(output.contains("1) work  (firefox -P work)"));
    }

    #[test]
    fn test_choose_by_name() {
        let (choice, _) = choose("work\n");
        assert_eq!(choice.as_deref(), Some("work"));
    }

    #[test]
    fn test_choose_numeric_name_outside_list_range() {
        let profiles = vec![Profile::new("2024", "firefox -P archive")];
        let mut input = Cursor::new(b"2024\n".to_vec());
        let mut output = Vec::new();

        let choice = choose_profile(&mut input, &mut output, &profiles, "example.com").unwrap();
        assert_eq!(choice.as_deref(), Some("2024"));
    }

    #[test]
    fn test_choose_reprompts_on_invalid_answer() {
        let (choice, output) = choose("7\nnope\n1\n");
        assert_eq!(choice.as_deref(), Some("work"));
        assert_eq!(output.matches("is not one of the listed profiles").count(), 2);
    }

    #[test]
    fn test_choose_cancel() {
        assert_eq!(choose("\n").0, None);
        assert_eq!(choose("").0, None);
    }

    #[test]
    fn test_confirm_answers() {
        let ask = |answers: &str, default: bool| {
            let mut input = Cursor::new(answers.as_bytes().to_vec());
            let mut output = Vec::new();
            confirm(&mut input, &mut output, "Remember?", default).unwrap()
        };

        assert!(ask("y\n", false));
        assert!(ask("YES\n", false));
        assert!(!ask("n\n", true));
        assert!(ask("\n", true));
        assert!(!ask("", false));
        assert!(ask("maybe\ny\n", false));
    }
}
