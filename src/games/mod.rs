pub mod unscramble;
