mod cloning;
mod render;
