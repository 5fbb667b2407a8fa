mod filesystem;
