mod tests {
    use midi_light_engine::{
        ENGINE_NAME, ENGINE_VERSION, Layer, Parameter,
        metadata::{PARAMETERS, TEMPLATE_CSV_HEADER, parameter_info},
        write_template_csv,
    };

    fn template() -> String {
        let mut csv = String::new();
        write_template_csv(&mut csv).unwrap();
        csv
    }

    #[test]
    fn test_engine_identity() {
        assert_eq!(ENGINE_NAME, "Light Engine v1.0");
        assert_eq!(ENGINE_VERSION, 1);
    }

    #[test]
    fn test_parameter_info() {
        let lines = parameter_info(7).unwrap();
        assert_eq!(lines.name, "Number of Lines");
        assert_eq!(lines.layer, Layer::Foreground);

        assert_eq!(parameter_info(8).unwrap().layer, Layer::Shared);
        assert_eq!(parameter_info(9).unwrap().layer.as_str(), "");
        assert_eq!(parameter_info(0), None);
        assert_eq!(parameter_info(16), None);
    }

    #[test]
    fn test_parameters_table_is_in_cc_order() {
        for (info, parameter) in PARAMETERS.iter().zip(Parameter::ALL) {
            assert_eq!(info.parameter, parameter);
            assert_eq!(parameter.info(), info);
        }
    }

    #[test]
    fn test_template_header() {
        let csv = template();
        assert!(csv.starts_with(TEMPLATE_CSV_HEADER));
        assert_eq!(
            TEMPLATE_CSV_HEADER,
            "Parameter,CC,Minimum Value,Maximum Value,Layer,Tooltip,Choices"
        );
    }

    #[test]
    fn test_template_selector_rows_list_modes() {
        let csv = template();
        assert!(csv.contains(
            "\nForeground,6,0,127,,Layering of effects,\"Notes to Drives\nRainbow Wheel\nMoving Dots\n"
        ));
        assert!(csv.contains(
            "\nBackground,9,0,127,,Layering of effects,\"Flat Color background\nRainbow wheel background\nColor Sinusoid\"\n"
        ));
    }

    #[test]
    fn test_template_parameter_rows_list_users() {
        let csv = template();
        assert!(csv.contains(
            "\nPan,10,0,127,Foreground,Pan position for wave effects,\"Ocean Waves\nOpposing Waves\"\n"
        ));
        assert!(csv.contains(
            "\nStart,14,0,127,Background,start position of line,\"Color Sinusoid\"\n"
        ));
        assert!(csv.contains(
            "\nColor Amplitude,8,0,127,Shared,color Amplitude for color sinusoid,\"Color Sinusoid\nColor Sinusoid\"\n"
        ));
    }

    #[test]
    fn test_template_background_saturation_lists_move_start() {
        // odd lines of Move Start take the background saturation
        let csv = template();
        assert!(csv.contains(
            "\nSaturation,12,0,127,Background,\"Sets saturation [white, chosen hue]\",\"Move startLED with each note on event\nFlat Color background\nRainbow wheel background\nColor Sinusoid\"\n"
        ));
    }

    #[test]
    fn test_template_has_row_per_cc() {
        let csv = template();
        for cc in 1..=15 {
            assert!(csv.contains(&format!(",{cc},0,127,")), "CC{cc}");
        }
        assert!(!csv.contains(",16,0,127,"));
    }
}
