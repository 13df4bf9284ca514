mod tests {
    use midi_light_engine::{
        BackgroundMode, Hsv, NoteState, Parameter, ParameterState, mode::RenderContext,
    };

    const LEN: usize = 108;

    fn render(mode: BackgroundMode, params: &ParameterState) -> [Hsv; LEN] {
        let notes = NoteState::new();
        let ctx = RenderContext {
            params,
            notes: &notes,
            frame: 1,
        };
        let mut leds = [Hsv::new(1, 2, 3); LEN];
        mode.render(&ctx, &mut leds);
        leds
    }

    #[test]
    fn test_flat_fills_every_pixel() {
        let mut params = ParameterState::default();
        params.set(Parameter::BackgroundHue, 10);
        params.set(Parameter::BackgroundBrightness, 50);

        let leds = render(BackgroundMode::Flat, &params);
        assert!(leds.iter().all(|&led| led == Hsv::new(20, 200, 100)));
    }

    #[test]
    fn test_rainbow_steps_hue_along_strip() {
        let mut params = ParameterState::default();
        params.set(Parameter::BackgroundBrightness, 127);

        let leds = render(BackgroundMode::Rainbow, &params);
        // 255 / 108 = 2 per LED
        assert_eq!(leds[0], Hsv::new(0, 200, 254));
        assert_eq!(leds[1].hue, 2);
        assert_eq!(leds[54].hue, 108);
        assert_eq!(leds[107].hue, 214);
    }

    #[test]
    fn test_rainbow_hue_wraps() {
        let mut params = ParameterState::default();
        params.set(Parameter::BackgroundHue, 100);

        let leds = render(BackgroundMode::Rainbow, &params);
        assert_eq!(leds[0].hue, 200);
        assert_eq!(leds[28].hue, 0);
        assert_eq!(leds[29].hue, 2);
    }

    #[test]
    fn test_sinusoid_follows_phase_table() {
        let mut params = ParameterState::default();
        params.set(Parameter::BackgroundLength, 64);
        params.set(Parameter::ColorAmplitude, 100);

        let leds = render(BackgroundMode::Sinusoid, &params);
        assert_eq!(leds[0].hue, 10);
        assert_eq!(leds[14].hue, 100);
        assert_eq!(leds[31].hue, 0);
        assert_eq!(leds[32].hue, 246);
        assert_eq!(leds[46].hue, 156);
        // period of 64 LEDs
        assert_eq!(leds[64].hue, leds[0].hue);
    }

    #[test]
    fn test_sinusoid_start_shifts_phase() {
        let mut params = ParameterState::default();
        params.set(Parameter::BackgroundLength, 64);
        params.set(Parameter::ColorAmplitude, 100);
        params.set(Parameter::BackgroundStart, 14);

        let leds = render(BackgroundMode::Sinusoid, &params);
        assert_eq!(leds[0].hue, 100);
    }

    #[test]
    fn test_sinusoid_without_length_is_flat() {
        let mut params = ParameterState::default();
        params.set(Parameter::BackgroundHue, 30);
        params.set(Parameter::ColorAmplitude, 100);

        assert_eq!(
            render(BackgroundMode::Sinusoid, &params),
            render(BackgroundMode::Flat, &params)
        );
    }
}
