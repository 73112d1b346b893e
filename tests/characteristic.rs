mod tests {
    use light_units::{BrightnessRange, Characteristic, LevelRange, RangeError};

    #[test]
    fn test_characteristic_lifecycle() {
        let power = Characteristic::new(false);
        assert_eq!(power.value(), false);
        assert_eq!(power.pending(), None);
        assert!(!power.is_updated());
        assert_eq!(power.effective(), false);

        power.request(true);
        assert!(power.is_updated());
        assert_eq!(power.pending(), Some(true));
        assert_eq!(power.effective(), true);
        // Committed value is untouched until commit
        assert_eq!(power.value(), false);

        power.commit();
        assert_eq!(power.value(), true);
        assert_eq!(power.pending(), None);
        assert!(!power.is_updated());
        assert_eq!(power.effective(), true);
    }

    #[test]
    fn test_commit_without_pending_is_noop() {
        let brightness = Characteristic::new(75u8);
        brightness.commit();
        assert_eq!(brightness.value(), 75);
        assert!(!brightness.is_updated());
    }

    #[test]
    fn test_request_overwrites_pending() {
        let hue = Characteristic::new(0.0f32);
        hue.request(90.0);
        hue.request(180.0);
        assert_eq!(hue.effective(), 180.0);
        hue.commit();
        assert_eq!(hue.value(), 180.0);
    }

    #[test]
    fn test_level_range_validate_bounds() {
        let full = LevelRange::FULL;
        assert_eq!(full.validate(0), Ok(0));
        assert_eq!(full.validate(100), Ok(100));
        assert_eq!(full.validate(101), Err(RangeError::OutOfBounds));

        let range = LevelRange::new(10, 90, 5);
        assert_eq!(range.validate(10), Ok(10));
        assert_eq!(range.validate(15), Ok(15));
        assert_eq!(range.validate(90), Ok(90));
        assert_eq!(range.validate(9), Err(RangeError::OutOfBounds));
        assert_eq!(range.validate(91), Err(RangeError::OutOfBounds));
        assert_eq!(range.validate(12), Err(RangeError::OffStep));
    }

    #[test]
    fn test_level_range_clamp() {
        let range = LevelRange::new(10, 90, 1);
        assert_eq!(range.clamp(5), 10);
        assert_eq!(range.clamp(50), 50);
        assert_eq!(range.clamp(95), 90);
    }

    #[test]
    fn test_brightness_range_clamp() {
        let range = BrightnessRange::new(20, 200);
        assert_eq!(range.clamp(0), 20);
        assert_eq!(range.clamp(127), 127);
        assert_eq!(range.clamp(255), 200);

        assert_eq!(BrightnessRange::FULL.clamp(255), 255);
        assert_eq!(BrightnessRange::FULL.clamp(0), 0);
    }
}
