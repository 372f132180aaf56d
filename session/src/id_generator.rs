use rand::Rng;

pub fn generate_game_id() -> String {
    let mut rng = rand::rng();
    format!("{:032x}", rng.random::<u128>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_well_formed() {
        let id = generate_game_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
