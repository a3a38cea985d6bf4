use image::Rgba;

use super::{Canvas, IconKind};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const ORANGE: Rgba<u8> = Rgba([255, 165, 0, 255]);
const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
const GOLD: Rgba<u8> = Rgba([255, 220, 0, 255]);
const BROWN: Rgba<u8> = Rgba([139, 69, 19, 255]);
const DARK_BROWN: Rgba<u8> = Rgba([101, 67, 33, 255]);
const TAN: Rgba<u8> = Rgba([210, 180, 140, 255]);
const GREEN: Rgba<u8> = Rgba([34, 139, 34, 255]);
const DARK_GREEN: Rgba<u8> = Rgba([0, 100, 0, 255]);
const BLUE: Rgba<u8> = Rgba([100, 149, 237, 255]);
const LIGHT_BLUE: Rgba<u8> = Rgba([173, 216, 230, 255]);
const RED: Rgba<u8> = Rgba([220, 20, 60, 255]);
const PINK: Rgba<u8> = Rgba([255, 182, 193, 255]);
const GRAY: Rgba<u8> = Rgba([169, 169, 169, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub(super) fn draw(kind: IconKind, c: &mut Canvas) {
    match kind {
        IconKind::Cat => cat(c),
        IconKind::Dog => dog(c),
        IconKind::Sun => sun(c),
        IconKind::Moon => moon(c),
        IconKind::Star => star(c),
        IconKind::Fish => fish(c),
        IconKind::Tree => tree(c),
        IconKind::Frog => frog(c),
        IconKind::Bird => bird(c),
        IconKind::Cake => cake(c),
        IconKind::Hat => hat(c),
        IconKind::Run => run(c),
        IconKind::Jump => jump(c),
        IconKind::Play => play(c),
        IconKind::Rain => rain(c),
        IconKind::Snow => snow(c),
        IconKind::Leaf => leaf(c),
        IconKind::Bear => bear(c),
        IconKind::Duck => duck(c),
        IconKind::Ship => ship(c),
    }
}

fn set_all(c: &mut Canvas, points: &[(i32, i32)], color: Rgba<u8>) {
    for &(x, y) in points {
        c.set(x, y, color);
    }
}

fn cat(c: &mut Canvas) {
    c.fill_circle(16, 16, 8, ORANGE);
    // ears
    c.fill_rect(9, 6, 11, 10, ORANGE);
    c.fill_rect(20, 6, 22, 10, ORANGE);
    set_all(c, &[(10, 8), (21, 8)], PINK);
    // eyes, nose, mouth
    set_all(c, &[(13, 14), (19, 14)], BLACK);
    c.set(16, 17, PINK);
    set_all(c, &[(15, 18), (17, 18)], BLACK);
    // whiskers
    set_all(c, &[(10, 16), (11, 17), (22, 16), (21, 17)], WHITE);
}

fn dog(c: &mut Canvas) {
    c.fill_circle(16, 16, 8, BROWN);
    // floppy ears
    c.fill_rect(7, 10, 9, 20, DARK_BROWN);
    c.fill_rect(22, 10, 24, 20, DARK_BROWN);
    c.fill_circle(16, 19, 4, TAN);
    set_all(c, &[(13, 14), (19, 14)], BLACK);
    c.fill_rect(15, 17, 17, 18, BLACK);
    // tongue
    set_all(c, &[(16, 21), (16, 22)], RED);
}

fn sun(c: &mut Canvas) {
    c.fill_circle(16, 16, 7, YELLOW);
    let rays = [
        (16, 4), (16, 5), (16, 27), (16, 28),
        (4, 16), (5, 16), (27, 16), (28, 16),
        (8, 8), (9, 9), (23, 8), (22, 9),
        (8, 24), (9, 23), (23, 24), (22, 23),
    ];
    set_all(c, &rays, YELLOW);
}

fn moon(c: &mut Canvas) {
    c.fill_circle(16, 16, 10, YELLOW);
    c.fill_circle(20, 13, 8, TRANSPARENT);
}

fn star(c: &mut Canvas) {
    for y in 4..=10 {
        c.set(16, y, YELLOW);
    }
    c.fill_rect(8, 12, 24, 14, YELLOW);
    // lower legs
    for i in 0..8 {
        c.set(10 + i, 16 + i / 2, YELLOW);
        c.set(22 - i, 16 + i / 2, YELLOW);
    }
    c.fill_rect(13, 8, 19, 16, YELLOW);
    c.fill_rect(11, 10, 21, 14, YELLOW);
    c.fill_rect(12, 16, 20, 18, YELLOW);
    c.fill_rect(13, 18, 19, 20, YELLOW);
    c.fill_rect(14, 20, 18, 22, YELLOW);
}

fn fish(c: &mut Canvas) {
    c.fill_circle(16, 16, 7, BLUE);
    c.fill_rect(10, 12, 22, 20, BLUE);
    // tail
    c.fill_rect(4, 12, 9, 20, BLUE);
    c.fill_rect(2, 10, 6, 14, BLUE);
    c.fill_rect(2, 18, 6, 22, BLUE);
    c.set(21, 14, WHITE);
    c.set(22, 14, BLACK);
    c.set(24, 16, BLACK);
}

fn tree(c: &mut Canvas) {
    c.fill_rect(14, 22, 17, 30, BROWN);
    c.fill_circle(16, 14, 9, GREEN);
    c.fill_circle(12, 16, 6, GREEN);
    c.fill_circle(20, 16, 6, GREEN);
    c.fill_circle(16, 10, 6, DARK_GREEN);
}

fn frog(c: &mut Canvas) {
    c.fill_circle(16, 18, 8, GREEN);
    c.fill_circle(16, 12, 7, GREEN);
    // bulging eyes
    c.fill_circle(11, 8, 3, GREEN);
    c.fill_circle(21, 8, 3, GREEN);
    set_all(c, &[(11, 8), (21, 8)], BLACK);
    c.fill_rect(12, 17, 20, 17, BLACK);
}

fn bird(c: &mut Canvas) {
    c.fill_circle(16, 18, 6, BLUE);
    c.fill_circle(20, 12, 4, BLUE);
    c.set(21, 11, BLACK);
    set_all(c, &[(25, 12), (26, 12)], ORANGE);
    // wing
    c.fill_rect(10, 14, 16, 17, LIGHT_BLUE);
    // tail
    set_all(c, &[(8, 18), (7, 17), (7, 19)], BLUE);
}

fn cake(c: &mut Canvas) {
    c.fill_rect(8, 18, 24, 28, PINK);
    c.fill_rect(10, 14, 22, 18, RED);
    // frosting
    c.fill_rect(8, 17, 24, 18, WHITE);
    // candle and flame
    c.fill_rect(15, 8, 17, 14, YELLOW);
    set_all(c, &[(16, 6), (16, 7)], ORANGE);
}

fn hat(c: &mut Canvas) {
    c.fill_rect(4, 22, 28, 24, BLACK);
    c.fill_rect(10, 10, 22, 22, BLACK);
    c.fill_rect(10, 19, 22, 20, RED);
}

fn run(c: &mut Canvas) {
    c.fill_circle(18, 6, 3, WHITE);
    c.fill_rect(17, 9, 19, 18, WHITE);
    // arms, one forward and one back
    c.fill_rect(12, 11, 17, 12, WHITE);
    c.fill_rect(19, 13, 24, 14, WHITE);
    // legs
    c.fill_rect(13, 19, 17, 20, WHITE);
    c.fill_rect(14, 21, 16, 26, WHITE);
    c.fill_rect(19, 19, 23, 20, WHITE);
    c.fill_rect(22, 21, 24, 26, WHITE);
}

fn jump(c: &mut Canvas) {
    c.fill_circle(16, 4, 3, WHITE);
    c.fill_rect(15, 7, 17, 16, WHITE);
    // arms up
    c.fill_rect(10, 6, 15, 7, WHITE);
    c.fill_rect(17, 6, 22, 7, WHITE);
    c.fill_rect(9, 3, 10, 7, WHITE);
    c.fill_rect(22, 3, 23, 7, WHITE);
    // legs spread
    c.fill_rect(11, 17, 15, 18, WHITE);
    c.fill_rect(10, 19, 12, 22, WHITE);
    c.fill_rect(17, 17, 21, 18, WHITE);
    c.fill_rect(20, 19, 22, 22, WHITE);
    // ground
    c.fill_rect(6, 28, 26, 29, GRAY);
}

fn play(c: &mut Canvas) {
    // triangle pointing right
    for row in 0..20 {
        let width = if row > 10 { 20 - row } else { row };
        for x in 0..width {
            c.set(10 + x, 6 + row, WHITE);
        }
    }
    c.fill_circle(24, 24, 4, RED);
}

fn rain(c: &mut Canvas) {
    c.fill_circle(12, 8, 5, GRAY);
    c.fill_circle(20, 8, 5, GRAY);
    c.fill_circle(16, 6, 5, GRAY);
    c.fill_rect(8, 8, 24, 12, GRAY);
    let drops = [
        (10, 16), (10, 17),
        (15, 18), (15, 19),
        (20, 15), (20, 16),
        (12, 22), (12, 23),
        (18, 24), (18, 25),
        (22, 21), (22, 22),
    ];
    set_all(c, &drops, BLUE);
}

fn snow(c: &mut Canvas) {
    c.fill_rect(15, 4, 16, 28, WHITE);
    c.fill_rect(4, 15, 28, 16, WHITE);
    for i in 0..12 {
        c.set(4 + i, 4 + i, WHITE);
        c.set(5 + i, 4 + i, WHITE);
        c.set(27 - i, 4 + i, WHITE);
        c.set(26 - i, 4 + i, WHITE);
    }
}

fn leaf(c: &mut Canvas) {
    c.fill_circle(16, 14, 8, GREEN);
    c.fill_circle(18, 12, 6, GREEN);
    set_all(c, &[(24, 6), (23, 7), (22, 8)], GREEN);
    // stem
    c.fill_rect(10, 22, 11, 28, BROWN);
    c.fill_rect(12, 20, 13, 23, BROWN);
    // vein
    for i in 0..8 {
        c.set(14 + i, 12 + i / 2, DARK_GREEN);
    }
}

fn bear(c: &mut Canvas) {
    c.fill_circle(16, 16, 9, BROWN);
    c.fill_circle(8, 8, 3, BROWN);
    c.fill_circle(24, 8, 3, BROWN);
    c.fill_circle(8, 8, 1, TAN);
    c.fill_circle(24, 8, 1, TAN);
    c.fill_circle(16, 19, 4, TAN);
    set_all(c, &[(12, 14), (20, 14)], BLACK);
    c.fill_rect(15, 17, 17, 18, BLACK);
}

fn duck(c: &mut Canvas) {
    c.fill_circle(14, 20, 8, YELLOW);
    c.fill_circle(22, 12, 5, YELLOW);
    c.set(24, 11, BLACK);
    c.fill_rect(27, 13, 30, 14, ORANGE);
    c.fill_circle(12, 18, 4, GOLD);
    // water
    c.fill_rect(2, 26, 30, 27, BLUE);
}

fn ship(c: &mut Canvas) {
    c.fill_rect(4, 20, 28, 26, BROWN);
    c.fill_rect(6, 26, 26, 28, DARK_BROWN);
    // cabin with window
    c.fill_rect(12, 14, 20, 20, WHITE);
    c.fill_rect(14, 16, 16, 18, BLUE);
    // mast and flag
    c.fill_rect(15, 4, 16, 14, BLACK);
    c.fill_rect(17, 4, 22, 8, RED);
    c.fill_rect(0, 28, 31, 30, BLUE);
}
