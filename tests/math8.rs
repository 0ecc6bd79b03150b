mod tests {
    use badge_light_engine::math8::{hue_step_toward, scale8, sin8};

    #[test]
    fn test_sin8_quarter_points() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 0);
    }

    #[test]
    fn test_sin8_monotonic_cyclic() {
        for x in 0..64u8 {
            assert!(sin8(x + 1) >= sin8(x));
        }
        for x in 64..192u8 {
            assert!(sin8(x + 1) <= sin8(x));
        }
        for x in 192..255u8 {
            assert!(sin8(x + 1) >= sin8(x));
        }
    }

    #[test]
    fn test_sin8_symmetric_around_peak() {
        for d in 0..=63u8 {
            assert_eq!(sin8(64 - d), sin8(64 + d));
        }
    }

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_hue_step_toward_at_target() {
        assert_eq!(hue_step_toward(77, 77, 5), 77);
    }

    #[test]
    fn test_hue_step_toward_direct() {
        assert_eq!(hue_step_toward(10, 20, 5), 15);
        assert_eq!(hue_step_toward(20, 10, 5), 15);
    }

    #[test]
    fn test_hue_step_toward_lands_exactly() {
        assert_eq!(hue_step_toward(10, 13, 5), 13);
        assert_eq!(hue_step_toward(13, 10, 5), 10);
    }

    #[test]
    fn test_hue_step_toward_shorter_arc_wraps() {
        // 200 -> 10: 66 steps up through the wrap vs 190 down.
        assert_eq!(hue_step_toward(200, 10, 5), 205);
        // 10 -> 200: 66 steps down through the wrap vs 190 up.
        assert_eq!(hue_step_toward(10, 200, 5), 5);
        assert_eq!(hue_step_toward(250, 10, 5), 255);
    }

    #[test]
    fn test_hue_step_toward_opposite_point_steps_down() {
        assert_eq!(hue_step_toward(0, 128, 5), 251);
    }

    #[test]
    fn test_hue_step_toward_converges() {
        let mut hue = 200u8;
        for _ in 0..20 {
            hue = hue_step_toward(hue, 10, 5);
        }
        assert_eq!(hue, 10);
    }
}
