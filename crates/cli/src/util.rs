// Path: crates/cli/src/util.rs

pub fn titlecase(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::titlecase;

    #[test]
    fn test_titlecase() {
        assert_eq!(titlecase("sapphire"), "Sapphire");
        assert_eq!(titlecase("Emerald"), "Emerald");
        assert_eq!(titlecase(""), "");
    }
}
