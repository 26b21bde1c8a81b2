use super::walker::Line;

const INDENT: &str = "    ";

/// Join walked [Line]s into the final query text.
///
/// When `pretty` is set lines are separated by newlines and indented by four spaces per level,
/// otherwise they're separated by single spaces without any indentation.
pub fn render(lines: &[Line<'_>], pretty: bool) -> String {
    let size_hint = lines
        .iter()
        .map(|line| line.text.len() + 1 + if pretty { line.level * INDENT.len() } else { 0 })
        .sum();
    let mut output = String::with_capacity(size_hint);
    for line in lines.iter() {
        if !output.is_empty() {
            output.push(if pretty { '\n' } else { ' ' });
        }
        if pretty {
            for _ in 0..line.level {
                output.push_str(INDENT);
            }
        }
        output.push_str(line.text);
    }
    output
}
