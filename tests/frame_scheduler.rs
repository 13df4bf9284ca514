mod tests {
    use embassy_time::{Duration, Instant};
    use midi_light_engine::{
        EngineConfig, EventChannel, FrameScheduler, Hsv, LightEngine, OutputDriver,
        frame_scheduler::DEFAULT_FRAME_DURATION,
    };

    #[derive(Default)]
    struct RecordingDriver {
        frames: usize,
        last: Vec<Hsv>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, pixels: &[Hsv]) {
            self.frames += 1;
            self.last = pixels.to_vec();
        }
    }

    fn engine() -> LightEngine<108> {
        LightEngine::new(&EngineConfig::default())
    }

    #[test]
    fn test_default_frame_rate() {
        assert_eq!(DEFAULT_FRAME_DURATION, Duration::from_millis(33));
    }

    #[test]
    fn test_tick_renders_and_paces() {
        let channel: EventChannel<4> = EventChannel::new();
        let mut scheduler =
            FrameScheduler::new(engine(), channel.receiver(), RecordingDriver::default());

        let first = scheduler.tick(Instant::from_millis(0));
        assert_eq!(first.next_deadline, Instant::from_millis(33));
        assert_eq!(first.sleep_duration, Duration::from_millis(33));

        let second = scheduler.tick(Instant::from_millis(40));
        assert_eq!(second.next_deadline, Instant::from_millis(66));
        assert_eq!(second.sleep_duration, Duration::from_millis(26));

        assert_eq!(scheduler.output().frames, 2);
        assert_eq!(scheduler.output().last.len(), 108);
        assert_eq!(scheduler.engine().frame_count(), 2);
    }

    #[test]
    fn test_tick_skips_backlog_after_stall() {
        let channel: EventChannel<4> = EventChannel::new();
        let mut scheduler =
            FrameScheduler::new(engine(), channel.receiver(), RecordingDriver::default());

        scheduler.tick(Instant::from_millis(0));
        let late = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(late.next_deadline, Instant::from_millis(1033));
        assert_eq!(late.sleep_duration, Duration::from_millis(33));
    }

    #[test]
    fn test_tick_behind_schedule_does_not_sleep() {
        let channel: EventChannel<4> = EventChannel::new();
        let mut scheduler = FrameScheduler::with_frame_duration(
            engine(),
            channel.receiver(),
            RecordingDriver::default(),
            Duration::from_millis(10),
        );

        scheduler.tick(Instant::from_millis(0));
        let behind = scheduler.tick(Instant::from_millis(25));
        assert_eq!(behind.next_deadline, Instant::from_millis(20));
        assert_eq!(behind.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_events_apply_before_render() {
        let channel: EventChannel<4> = EventChannel::new();
        let sender = channel.sender();
        let mut scheduler =
            FrameScheduler::new(engine(), channel.receiver(), RecordingDriver::default());

        sender.control_change(1, 6, 1).unwrap();
        sender.control_change(1, 3, 127).unwrap();
        let result = scheduler.tick(Instant::from_millis(0));

        assert_eq!(result.events_applied, 2);
        assert_eq!(scheduler.output().last[0], Hsv::new(0, 200, 254));

        scheduler.engine_mut().set_cc(3, 0);
        let result = scheduler.tick(Instant::from_millis(33));
        assert_eq!(result.events_applied, 0);
        assert_eq!(scheduler.output().last[0].val, 0);
    }
}
