mod literals;
