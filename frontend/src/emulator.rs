use msx_core::prelude::Machine;
use msx_machines::msx::MsxSystem;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::audio;
use crate::input::KeyMap;
use crate::video::Video;

/// Samples per video frame at the 44.1 kHz mix rate and 50 Hz frame rate.
const SAMPLES_PER_FRAME: usize = 44_100 / 50;

/// Quits the emulator. Not bound to Escape, since Escape is a real MSX key.
const QUIT_SCANCODE: Scancode = Scancode::F12;

pub fn run(system: &mut MsxSystem, key_map: &KeyMap, scale: u32) {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");
    let sdl_audio = sdl_context.audio().expect("Failed to init SDL audio");

    let (width, height) = system.display_size();
    let mut video = Video::new(&sdl_video, "MSX Emulator", width, height, scale);
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");

    let audio_device = audio::init(&sdl_audio, 44_100);
    if let Some((device, _, _)) = &audio_device {
        device.resume();
    }

    let buffer_size = (width * height * 3) as usize;
    let mut framebuffer = vec![0u8; buffer_size];
    let mut audio_buf = [0i16; SAMPLES_PER_FRAME];

    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(QUIT_SCANCODE),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    if let Some(button_id) = key_map.get(sc) {
                        system.set_input(button_id, true);
                    }
                }

                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    if let Some(button_id) = key_map.get(sc) {
                        system.set_input(button_id, false);
                    }
                }

                _ => {}
            }
        }

        system.run_frame();

        if let Some((_, ring, _)) = &audio_device {
            system.fill_audio(&mut audio_buf);
            let mut buf = ring.lock().unwrap();
            buf.extend(audio_buf.iter().copied());
        }

        system.render_frame(&mut framebuffer);
        video.present(&framebuffer);
    }

    if let Some((_, _, fade_out)) = &audio_device {
        fade_out.store(true, std::sync::atomic::Ordering::Relaxed);
        std::thread::sleep(audio::fade_out_duration());
    }
}
