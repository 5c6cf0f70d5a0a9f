/// Title-case a string the way location names are stored
///
/// A character that follows a cased letter is lower-cased; any other
/// character is mapped to its titlecase form. Digits, punctuation and
/// uncased scripts therefore start a new word.
///
/// ```
/// assert_eq!(shared::util::title_case("new YORK"), "New York");
/// assert_eq!(shared::util::title_case("o'neil"), "O'Neil");
/// assert_eq!(shared::util::title_case("ßad"), "Ssad");
/// ```
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_cased = false;
    for ch in input.chars() {
        if previous_cased {
            out.extend(ch.to_lowercase());
        } else {
            push_titlecase(&mut out, ch);
        }
        previous_cased = is_cased(ch);
    }
    out
}

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase() || is_titlecase_letter(ch)
}

/// Unicode general category Lt
fn is_titlecase_letter(ch: char) -> bool {
    matches!(
        ch,
        'ǅ' | 'ǈ' | 'ǋ' | 'ǲ'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

fn push_titlecase(out: &mut String, ch: char) {
    match ch {
        'Ǆ' | 'ǅ' | 'ǆ' => out.push('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => out.push('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => out.push('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => out.push('ǲ'),
        'ŉ' => out.push_str("\u{2BC}N"),
        ch if is_titlecase_letter(ch) => out.push(ch),
        _ => {
            // multi-char uppercase forms (ß, ligatures) keep only the first capital
            let mut upper = ch.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            for rest in upper {
                out.extend(rest.to_lowercase());
            }
        }
    }
}

/// Amenity flag from a form value: present and non-empty means true
pub fn form_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
