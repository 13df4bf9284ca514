mod tests {
    use midi_light_engine::color::{Hsv, Rgb, frame_to_rgb};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_unlit_pixel_is_black() {
        assert_eq!(Hsv::BLACK.to_rgb(), BLACK);
        assert_eq!(Hsv::new(123, 200, 0).to_rgb(), BLACK);
    }

    #[test]
    fn test_unsaturated_pixel_is_white() {
        assert_eq!(Hsv::new(0, 0, 255).to_rgb(), WHITE);
        assert_eq!(Hsv::new(170, 0, 255).to_rgb(), WHITE);
    }

    #[test]
    fn test_with_val() {
        let color = Hsv::new(10, 20, 30).with_val(99);
        assert_eq!(color, Hsv::new(10, 20, 99));
    }

    #[test]
    fn test_frame_to_rgb_stops_at_shorter_slice() {
        let frame = [Hsv::new(0, 0, 255); 4];
        let mut out = [BLACK; 2];
        frame_to_rgb(&frame, &mut out);
        assert_eq!(out, [WHITE, WHITE]);

        let mut out = [BLACK; 6];
        frame_to_rgb(&frame, &mut out);
        assert_eq!(out[3], WHITE);
        assert_eq!(out[4], BLACK);
    }
}
