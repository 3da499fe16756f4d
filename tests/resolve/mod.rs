mod all_mode;
