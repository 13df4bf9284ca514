mod tests {
    use midi_light_engine::{EventChannel, MidiEvent, TryReceiveError, TrySendError};

    const CC: MidiEvent = MidiEvent::ControlChange {
        channel: 1,
        control: 1,
        value: 64,
    };

    #[test]
    fn test_events_arrive_in_order() {
        let channel: EventChannel<4> = EventChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        sender.note_on(2, 60, 100).unwrap();
        sender.control_change(1, 1, 64).unwrap();
        sender.note_off(2, 60, 0).unwrap();
        assert_eq!(channel.len(), 3);

        assert_eq!(
            receiver.try_receive(),
            Ok(MidiEvent::NoteOn {
                channel: 2,
                note: 60,
                velocity: 100
            })
        );
        assert_eq!(receiver.try_receive(), Ok(CC));
        assert!(matches!(receiver.try_receive(), Ok(MidiEvent::NoteOff { .. })));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_full_channel_returns_event() {
        let channel: EventChannel<2> = EventChannel::new();
        let sender = channel.sender();

        sender.try_send(CC).unwrap();
        sender.try_send(CC).unwrap();

        let rejected = MidiEvent::NoteOn {
            channel: 1,
            note: 1,
            velocity: 1,
        };
        assert_eq!(sender.try_send(rejected), Err(TrySendError(rejected)));
        assert_eq!(channel.len(), 2);
    }

    #[test]
    fn test_static_channel() {
        static EVENTS: EventChannel<8> = EventChannel::new();

        EVENTS.sender().control_change(1, 6, 3).unwrap();
        assert_eq!(
            EVENTS.receiver().try_receive(),
            Ok(MidiEvent::ControlChange {
                channel: 1,
                control: 6,
                value: 3
            })
        );
    }
}
