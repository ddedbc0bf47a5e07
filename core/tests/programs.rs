use rand::Rng;

use chip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_ROM_SIZE, SPRITE_SHEET};
use chip8_core::{Chip8, Error};

fn load(program: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::new();
    chip8.load_rom(program).unwrap();
    chip8
}

fn lit_pixels(chip8: &Chip8) -> usize {
    chip8.frame_buffer().iter().filter(|&&pixel| pixel == 1).count()
}

#[test]
fn test_load_then_add() {
    let mut chip8 = load(&[0x60, 0x0A, 0x70, 0x05]);
    chip8.step().unwrap();
    chip8.step().unwrap();
    assert_eq!(chip8.registers()[0x0], 0x0F);
    assert_eq!(chip8.pc(), 0x204);
}

#[test]
fn test_fresh_machine() {
    let chip8 = Chip8::new();
    assert_eq!(chip8.pc(), 0x200);
    assert_eq!(chip8.index(), 0);
    assert_eq!(chip8.registers(), &[0; 16]);
    assert_eq!(lit_pixels(&chip8), 0);
    assert_eq!(chip8.state().memory[..0x50], SPRITE_SHEET[..]);
    assert!(chip8.state().memory[0x50..].iter().all(|&byte| byte == 0));
}

#[test]
fn test_rom_too_large_is_reported() {
    let mut chip8 = load(&[0x60, 0x0A]);
    let result = chip8.load_rom(&vec![0; MAX_ROM_SIZE + 1]);
    assert!(matches!(result, Err(Error::RomTooLarge { .. })));
    assert_eq!(chip8.state().memory[0x200..0x202], [0x60, 0x0A]);
}

#[test]
fn test_draw_every_digit() {
    // I = 5 * digit; draw at (8 * digit, 0); next digit
    let mut program = vec![0x61, 0x00];
    for digit in 0..8u8 {
        let sprite = u16::from(digit) * 5;
        program.extend_from_slice(&[
            0xA0 | (sprite >> 8) as u8,
            sprite as u8,
            0x60,
            digit * 8,
            0xD0,
            0x15,
        ]);
    }
    let mut chip8 = load(&program);
    for _ in 0..program.len() / 2 {
        chip8.step().unwrap();
    }

    let lit: usize = SPRITE_SHEET[..40]
        .iter()
        .map(|row| row.count_ones() as usize)
        .sum();
    assert_eq!(lit_pixels(&chip8), lit);
    assert_eq!(chip8.registers()[0xF], 0);
    assert_eq!(chip8.unimplemented_opcodes(), 0);
}

#[test]
fn test_clear_after_draw() {
    let mut chip8 = load(&[0xA0, 0x00, 0xD0, 0x05, 0x00, 0xE0]);
    chip8.step().unwrap();
    chip8.step().unwrap();
    assert!(lit_pixels(&chip8) > 0);
    chip8.step().unwrap();
    assert_eq!(lit_pixels(&chip8), 0);
}

#[test]
fn test_random_sprites_erase_themselves() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let x: u8 = rng.gen();
        let y: u8 = rng.gen();
        let height: u8 = rng.gen_range(1..=15);

        // Vx = x; Vy = y; I = 0x300; draw; draw
        let mut rom = vec![0x63, x, 0x64, y, 0xA3, 0x00, 0xD3, 0x40 | height, 0xD3, 0x40 | height];
        rom.resize(0x100, 0);
        let sprite: Vec<u8> = (0..height).map(|_| rng.gen()).collect();
        rom.extend_from_slice(&sprite);

        let mut chip8 = load(&rom);
        for _ in 0..3 {
            chip8.step().unwrap();
        }
        assert_eq!(lit_pixels(&chip8), 0);

        chip8.step().unwrap();
        let drawn: usize = sprite.iter().map(|row| row.count_ones() as usize).sum();
        assert_eq!(lit_pixels(&chip8), drawn);
        assert_eq!(chip8.registers()[0xF], 0);

        chip8.step().unwrap();
        assert_eq!(lit_pixels(&chip8), 0);
        assert_eq!(chip8.registers()[0xF], u8::from(drawn > 0));
    }
}

#[test]
fn test_draw_never_leaves_the_screen() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let x: u8 = rng.gen();
        let y: u8 = rng.gen();
        let mut chip8 = load(&[0x60, x, 0x61, y, 0xA0, 0x00, 0xD0, 0x1F]);
        for _ in 0..4 {
            chip8.step().unwrap();
        }
        assert_eq!(chip8.frame_buffer().len(), DISPLAY_WIDTH * DISPLAY_HEIGHT);
        assert!(chip8.frame_buffer().iter().all(|&pixel| pixel <= 1));
    }
}

#[test]
fn test_falling_off_the_end() {
    // nothing but no-ops until the pc leaves memory
    let mut chip8 = load(&[0x00, 0x00]);
    let steps = (0x1000 - 0x200) / 2;
    for _ in 0..steps {
        chip8.step().unwrap();
    }
    assert!(matches!(
        chip8.step(),
        Err(Error::MemoryOutOfBounds { address: 0x1000 })
    ));
    assert_eq!(chip8.unimplemented_opcodes(), steps);
}

#[test]
fn test_sprite_hanging_off_the_end_of_memory() {
    // I = 0xFFE; draw 3 rows at (0, 0); spin
    let mut chip8 = load(&[0xAF, 0xFE, 0xD0, 0x03, 0x12, 0x04]);
    chip8.step().unwrap();
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x204);
    // 0xFFE and 0xFFF are blank, and so is the row past them
    assert_eq!(lit_pixels(&chip8), 0);
    assert_eq!(chip8.registers()[0xF], 0);
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x204);
}
