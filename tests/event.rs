mod tests {
    use midi_light_engine::MidiEvent;

    #[test]
    fn test_from_bytes_note_on() {
        assert_eq!(
            MidiEvent::from_bytes(0x92, 60, 100),
            Some(MidiEvent::NoteOn {
                channel: 3,
                note: 60,
                velocity: 100
            })
        );
    }

    #[test]
    fn test_from_bytes_note_on_zero_velocity_is_note_off() {
        assert_eq!(
            MidiEvent::from_bytes(0x92, 60, 0),
            Some(MidiEvent::NoteOff {
                channel: 3,
                note: 60,
                velocity: 0
            })
        );
    }

    #[test]
    fn test_from_bytes_control_change() {
        assert_eq!(
            MidiEvent::from_bytes(0xBF, 7, 127),
            Some(MidiEvent::ControlChange {
                channel: 16,
                control: 7,
                value: 127
            })
        );
    }

    #[test]
    fn test_from_bytes_masks_data_bytes() {
        assert_eq!(
            MidiEvent::from_bytes(0x80, 0xBC, 0xFF),
            Some(MidiEvent::NoteOff {
                channel: 1,
                note: 0x3C,
                velocity: 0x7F
            })
        );
    }

    #[test]
    fn test_from_bytes_ignores_other_messages() {
        assert_eq!(MidiEvent::from_bytes(0xE0, 0, 64), None);
        assert_eq!(MidiEvent::from_bytes(0xC0, 5, 0), None);
        assert_eq!(MidiEvent::from_bytes(0xF8, 0, 0), None);
    }

    #[test]
    fn test_to_bytes() {
        let event = MidiEvent::ControlChange {
            channel: 10,
            control: 6,
            value: 8,
        };
        assert_eq!(event.to_bytes(), [0xB9, 6, 8]);
        assert_eq!(event.channel(), 10);

        let [status, data1, data2] = event.to_bytes();
        assert_eq!(MidiEvent::from_bytes(status, data1, data2), Some(event));
    }
}
