/// Cycles through the frames of a sprite sheet at a fixed rate.
#[derive(Copy, Clone, Debug)]
pub struct SpriteAnimation {
    frame: usize,
    frame_count: usize,
    elapsed: f32,
    seconds_per_frame: f32,
}

impl SpriteAnimation {
    const SECONDS_PER_FRAME: f32 = 0.15;

    pub fn new(frame_count: usize) -> Self {
        SpriteAnimation {
            frame: 0,
            frame_count: frame_count.max(1),
            elapsed: 0.,
            seconds_per_frame: Self::SECONDS_PER_FRAME,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advance by `dt` seconds. Moves at most one frame per call, the remaining time carries over.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= self.seconds_per_frame {
            self.elapsed -= self.seconds_per_frame;
            self.frame = (self.frame + 1) % self.frame_count;
        }
    }
}
