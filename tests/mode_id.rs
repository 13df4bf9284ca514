mod tests {
    use midi_light_engine::{BackgroundMode, ForegroundMode};

    #[test]
    fn test_foreground_from_raw() {
        assert_eq!(ForegroundMode::from_raw(0), Some(ForegroundMode::NotesToDrives));
        assert_eq!(ForegroundMode::from_raw(5), Some(ForegroundMode::MoveStart));
        assert_eq!(ForegroundMode::from_raw(9), Some(ForegroundMode::OpposingWaves));
        assert_eq!(ForegroundMode::from_raw(10), None);
    }

    #[test]
    fn test_foreground_names_round_trip() {
        for mode in ForegroundMode::ALL {
            assert_eq!(ForegroundMode::parse_from_str(mode.as_str()), Some(mode));
            assert_eq!(ForegroundMode::from_raw(mode.id()), Some(mode));
        }
        assert_eq!(
            ForegroundMode::parse_from_str("ocean_waves"),
            Some(ForegroundMode::OceanWaves)
        );
        assert_eq!(ForegroundMode::parse_from_str("Ocean Waves"), None);
    }

    #[test]
    fn test_background_from_raw_falls_back_to_flat() {
        assert_eq!(BackgroundMode::from_raw(2), Some(BackgroundMode::Sinusoid));
        assert_eq!(BackgroundMode::from_raw(3), None);
        assert_eq!(BackgroundMode::from_raw_or_flat(3), BackgroundMode::Flat);
        assert_eq!(BackgroundMode::from_raw_or_flat(127), BackgroundMode::Flat);
    }

    #[test]
    fn test_background_names_round_trip() {
        for mode in BackgroundMode::ALL {
            assert_eq!(BackgroundMode::parse_from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(BackgroundMode::parse_from_str("rainbow"), Some(BackgroundMode::Rainbow));
    }
}
